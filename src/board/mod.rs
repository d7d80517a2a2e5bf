pub mod config;
pub mod error;
pub mod model;
pub mod piece;
pub mod position;

pub use config::{GameConfig, TimeControl};
pub use error::BoardError;
pub use model::{BoardModel, ChessBoard, Clocks};
pub use piece::{Color, Piece, PieceType, Square};
pub use position::{CastlingRights, Position, STANDARD_START_FEN};
