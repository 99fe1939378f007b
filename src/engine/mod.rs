pub mod chain;
pub mod controller;
pub mod easing;
pub mod pointer;
pub mod scheduler;
