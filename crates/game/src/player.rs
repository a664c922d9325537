use othello_core::Color;

/// Who decides the moves for one color.
///
/// Roles are plain values: they hold no board state and are replaced by
/// assignment when the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    Human,
    Computer,
}

impl PlayerRole {
    pub fn is_computer(self) -> bool {
        self == PlayerRole::Computer
    }
}

/// Role assignment for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Players {
    pub black: PlayerRole,
    pub white: PlayerRole,
}

impl Players {
    /// Black is always human; White is the computer in vs-computer mode.
    pub fn for_mode(vs_computer: bool) -> Self {
        Self {
            black: PlayerRole::Human,
            white: if vs_computer {
                PlayerRole::Computer
            } else {
                PlayerRole::Human
            },
        }
    }

    pub fn role(&self, color: Color) -> PlayerRole {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}
