pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_input_handlers, InputWiring};

use crate::core::Command;
use std::cell::RefCell;
use std::rc::Rc;

/// Commands produced by DOM callbacks, drained once per frame.
pub type CommandQueue = Rc<RefCell<Vec<Command>>>;
