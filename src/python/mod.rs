//! Python bindings for the tic-tac-toe engine.
//!
//! The engine is exposed as a gym-flavored environment class: `reset` and
//! `step` return observations as nested lists plus an info dict with the
//! move history, the player to move and the signed winner.
//!
//! # Quick Start
//!
//! ```python
//! import rust_tictactoe as ttt
//!
//! env = ttt.TicTacToe(size=3)
//! obs, info = env.reset()
//!
//! while True:
//!     action = env.get_actions()[0]
//!     obs, winner, terminal, info = env.step(action)
//!     if terminal:
//!         break
//!
//! print(env.render())
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// rust-tictactoe: a generalized tic-tac-toe engine.
#[pymodule]
fn rust_tictactoe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTicTacToe>()?;
    Ok(())
}
