mod input_handler;
mod round_handler;
mod stats_handler;

pub use input_handler::InputHandler;
pub use round_handler::RoundHandler;
pub use stats_handler::StatsHandler;
