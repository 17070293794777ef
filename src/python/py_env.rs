//! Environment bindings.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::{Action, Board, Player};
use crate::engine::TicTacToe;
use crate::render;

fn player_from_sign(sign: i8) -> PyResult<Player> {
    Player::from_sign(sign).ok_or_else(|| PyValueError::new_err("player must be 1 or -1"))
}

fn grid(board: &Board) -> Vec<Vec<i8>> {
    board.rows().map(<[i8]>::to_vec).collect()
}

/// Python wrapper for the engine.
#[pyclass(name = "TicTacToe")]
#[derive(Clone)]
pub struct PyTicTacToe(pub TicTacToe);

#[pymethods]
impl PyTicTacToe {
    /// Create an engine for an n×n grid.
    #[new]
    #[pyo3(signature = (size = 3))]
    fn new(size: usize) -> PyResult<Self> {
        TicTacToe::new(size)
            .map(Self)
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    /// Grid size n.
    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    /// Number of distinct actions (n²).
    #[getter]
    fn action_count(&self) -> usize {
        self.0.action_count()
    }

    /// Reset the game; returns `(observation, info)`.
    ///
    /// The seed is accepted for interface uniformity and unused - the
    /// rules are deterministic.
    #[pyo3(signature = (seed = None))]
    fn reset(&mut self, py: Python<'_>, seed: Option<u64>) -> PyResult<(Vec<Vec<i8>>, Py<PyDict>)> {
        let (board, _) = self.0.reset(seed);
        Ok((grid(&board), self.info_dict(py)?))
    }

    /// Apply an action; returns `(observation, winner, terminal, info)`.
    ///
    /// Raises `ValueError` on an illegal action; the game state is left
    /// untouched.
    fn step(
        &mut self,
        py: Python<'_>,
        action: u32,
    ) -> PyResult<(Vec<Vec<i8>>, i8, bool, Py<PyDict>)> {
        let step = self
            .0
            .step(Action::new(action))
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok((
            grid(&step.observation),
            step.result.signed(),
            step.terminal,
            self.info_dict(py)?,
        ))
    }

    /// Playable cell indices, ascending.
    fn get_actions(&self) -> Vec<u32> {
        self.0
            .legal_actions()
            .iter()
            .map(|action| action.index() as u32)
            .collect()
    }

    /// Board for a player (`1` or `-1`); own marks are always `+1`.
    fn get_observation(&self, player: i8) -> PyResult<Vec<Vec<i8>>> {
        Ok(grid(&self.0.observation(player_from_sign(player)?)))
    }

    /// Signed result for a player: `+1` win, `-1` loss, `0` otherwise.
    fn get_result(&self, player: i8) -> PyResult<i8> {
        Ok(self.0.result_for(player_from_sign(player)?))
    }

    /// Text rendering of the player-one observation.
    fn render(&self) -> String {
        render::to_text(&self.0.observation(Player::ONE))
    }

    /// Independent deep copy for search branching.
    #[pyo3(name = "clone")]
    fn copy(&self) -> Self {
        Self(self.0.clone())
    }

    fn __repr__(&self) -> String {
        format!("TicTacToe(size={})", self.0.size())
    }
}

impl PyTicTacToe {
    fn info_dict(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        let info = self.0.info();
        let dict = PyDict::new_bound(py);
        dict.set_item(
            "history",
            info.history.iter().map(|action| action.index()).collect::<Vec<_>>(),
        )?;
        dict.set_item("player", info.player.sign())?;
        dict.set_item("winner", info.result.signed())?;
        Ok(dict.into())
    }
}
