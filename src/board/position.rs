use super::error::BoardError;
use super::piece::{Color, Piece, PieceType, Square};

pub const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling rights for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    /// Parse the FEN castling field ("KQkq", "Kq", "-")
    pub fn from_fen(field: &str) -> Result<Self, BoardError> {
        let mut rights = Self::default();
        if field == "-" {
            return Ok(rights);
        }

        let mut last_index = None;
        for c in field.chars() {
            let index = match c {
                'K' => 0,
                'Q' => 1,
                'k' => 2,
                'q' => 3,
                _ => {
                    return Err(BoardError::InvalidFen(format!(
                        "Invalid castling rights character '{}' (valid: K, Q, k, q, or - for none)",
                        c
                    )))
                }
            };
            if last_index.is_some_and(|last| index <= last) {
                return Err(BoardError::InvalidFen(format!(
                    "Castling rights '{}' repeat a side or are out of KQkq order",
                    field
                )));
            }
            last_index = Some(index);

            match index {
                0 => rights.white_kingside = true,
                1 => rights.white_queenside = true,
                2 => rights.black_kingside = true,
                _ => rights.black_queenside = true,
            }
        }

        Ok(rights)
    }

    pub fn to_fen(&self) -> String {
        let mut result = String::new();
        if self.white_kingside {
            result.push('K');
        }
        if self.white_queenside {
            result.push('Q');
        }
        if self.black_kingside {
            result.push('k');
        }
        if self.black_queenside {
            result.push('q');
        }

        if result.is_empty() {
            "-".to_string()
        } else {
            result
        }
    }
}

/// Piece placement and the bookkeeping fields of a FEN record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// squares[rank][file], rank 0 = rank 1, file 0 = file a
    squares: [[Option<Piece>; 8]; 8],
    active_color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Position {
    /// The standard starting position
    pub fn standard() -> Self {
        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut squares = [[None; 8]; 8];
        for (file, &piece_type) in back_rank.iter().enumerate() {
            squares[0][file] = Some(Piece::new(piece_type, Color::White));
            squares[1][file] = Some(Piece::new(PieceType::Pawn, Color::White));
            squares[6][file] = Some(Piece::new(PieceType::Pawn, Color::Black));
            squares[7][file] = Some(Piece::new(piece_type, Color::Black));
        }

        Position {
            squares,
            active_color: Color::White,
            castling_rights: CastlingRights {
                white_kingside: true,
                white_queenside: true,
                black_kingside: true,
                black_queenside: true,
            },
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Parse "placement active castling en_passant halfmove fullmove"
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let fen = fen.trim();
        if fen.is_empty() {
            return Err(BoardError::InvalidFen("FEN string cannot be empty".to_string()));
        }

        let parts: Vec<&str> = fen.split_whitespace().collect();
        let [placement, active, castling, en_passant, halfmove, fullmove] = parts.as_slice() else {
            return Err(BoardError::InvalidFen(format!(
                "FEN must have exactly 6 fields, found {}",
                parts.len()
            )));
        };

        let squares = Self::parse_placement(placement)?;

        let active_color = match *active {
            "w" => Color::White,
            "b" => Color::Black,
            _ => {
                return Err(BoardError::InvalidFen(format!(
                    "Invalid active color '{}' (must be 'w' or 'b')",
                    active
                )))
            }
        };

        let castling_rights = CastlingRights::from_fen(castling)?;

        let en_passant_target = match *en_passant {
            "-" => None,
            field => {
                let square: Square = field
                    .parse()
                    .map_err(|e: BoardError| BoardError::InvalidFen(e.to_string()))?;
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(BoardError::InvalidFen(format!(
                        "En passant target '{}' must be on rank 3 or 6",
                        field
                    )));
                }
                Some(square)
            }
        };

        let halfmove_clock = halfmove.parse::<u16>().map_err(|e| {
            BoardError::InvalidFen(format!("Invalid halfmove clock '{}': {}", halfmove, e))
        })?;

        let fullmove_number = fullmove.parse::<u16>().map_err(|e| {
            BoardError::InvalidFen(format!("Invalid fullmove number '{}': {}", fullmove, e))
        })?;
        if fullmove_number == 0 {
            return Err(BoardError::InvalidFen(
                "Fullmove number must be at least 1".to_string(),
            ));
        }

        Ok(Position {
            squares,
            active_color,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(placement: &str) -> Result<[[Option<Piece>; 8]; 8], BoardError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::InvalidFen(format!(
                "Piece placement must have exactly 8 ranks separated by '/', found {}",
                ranks.len()
            )));
        }

        let mut squares = [[None; 8]; 8];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let board_rank = 7 - rank_idx;
            let fen_rank = 8 - rank_idx;
            let mut file = 0usize;

            for c in rank_str.chars() {
                if let Some(empty) = c.to_digit(10) {
                    let empty = empty as usize;
                    if empty == 0 || file + empty > 8 {
                        return Err(BoardError::InvalidFen(format!(
                            "Empty square count '{}' does not fit rank {}",
                            c, fen_rank
                        )));
                    }
                    file += empty;
                    continue;
                }

                if file >= 8 {
                    return Err(BoardError::InvalidFen(format!(
                        "Rank {} has more than 8 squares",
                        fen_rank
                    )));
                }
                let piece = Piece::from_fen_char(c).ok_or_else(|| {
                    BoardError::InvalidFen(format!(
                        "Invalid piece character '{}' in rank {} (valid pieces: KQRBNPkqrbnp)",
                        c, fen_rank
                    ))
                })?;
                squares[board_rank][file] = Some(piece);
                file += 1;
            }

            if file != 8 {
                return Err(BoardError::InvalidFen(format!(
                    "Rank {} must represent exactly 8 squares, found {}",
                    fen_rank, file
                )));
            }
        }

        Ok(squares)
    }

    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut rank_string = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some(piece) => {
                        if empty > 0 {
                            rank_string.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank_string.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                rank_string.push_str(&empty.to_string());
            }
            ranks.push(rank_string);
        }

        let active = match self.active_color {
            Color::White => "w",
            Color::Black => "b",
        };
        let en_passant = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            ranks.join("/"),
            active,
            self.castling_rights.to_fen(),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// ASCII diagram from White's side, rank 8 on top
    pub fn to_ascii(&self) -> String {
        let mut result = String::from("  a b c d e f g h\n");
        for rank in (0..8).rev() {
            let row: Vec<String> = self.squares[rank]
                .iter()
                .map(|sq| sq.map_or_else(|| ".".to_string(), |p| p.to_string()))
                .collect();
            result.push_str(&format!("{} {} {}\n", rank + 1, row.join(" "), rank + 1));
        }
        result.push_str("  a b c d e f g h");
        result
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Hand the move to the other side, bumping the counters the way FEN does
    pub(crate) fn pass_turn(&mut self) {
        if self.active_color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        self.en_passant_target = None;
        self.active_color = self.active_color.opposite();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_position_round_trips() {
        let position = Position::standard();
        assert_eq!(position.to_fen(), STANDARD_START_FEN);
        assert_eq!(position.piece_count(), 32);
        assert_eq!(
            position.piece_at(Square::new(4, 0).unwrap()),
            Some(Piece::new(PieceType::King, Color::White))
        );
    }

    #[test]
    fn test_parses_bookkeeping_fields() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 12 40").unwrap();
        assert_eq!(position.active_color(), Color::White);
        assert_eq!(position.castling_rights(), CastlingRights::default());
        assert_eq!(position.en_passant_target().unwrap().to_string(), "d6");
        assert_eq!(position.halfmove_clock(), 12);
        assert_eq!(position.fullmove_number(), 40);
        assert_eq!(position.piece_count(), 4);
    }

    #[test]
    fn test_rejects_malformed_fen() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/ppppXppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w QK - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
        ];
        for fen in bad {
            assert!(
                matches!(Position::from_fen(fen), Err(BoardError::InvalidFen(_))),
                "accepted {:?}",
                fen
            );
        }
    }

    #[test]
    fn test_ascii_diagram() {
        let ascii = Position::standard().to_ascii();
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
    }

    #[test]
    fn test_pass_turn_counts_moves() {
        let mut position = Position::standard();
        position.pass_turn();
        assert_eq!(position.active_color(), Color::Black);
        assert_eq!(position.fullmove_number(), 1);
        position.pass_turn();
        assert_eq!(position.active_color(), Color::White);
        assert_eq!(position.fullmove_number(), 2);
        assert_eq!(position.halfmove_clock(), 2);
    }
}
