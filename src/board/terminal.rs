use super::{Board, PlayerId, WinningLine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Win(PlayerId),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool { !matches!(self, GameState::InProgress) }

    pub fn winner(self) -> Option<PlayerId> {
        match self { GameState::Win(p) => Some(p), _ => None }
    }
}

impl Board {
    /// Owner of `line` if every cell is occupied by the same player.
    pub fn line_winner(&self, line: &[usize]) -> Option<PlayerId> {
        if line.len() <= 1 { return None; }
        for pair in line.windows(2) {
            let (a, b) = (self.get(pair[0])?, self.get(pair[1])?);
            if a != b { return None; }
        }
        self.get(line[0])
    }

    /// First completed line in enumeration order.
    pub fn winning_line(&self) -> Option<(&WinningLine, PlayerId)> {
        self.lines.iter().find_map(|l| self.line_winner(l).map(|p| (l, p)))
    }

    pub fn state(&self) -> GameState {
        if let Some((_, p)) = self.winning_line() { return GameState::Win(p); }
        if self.is_all_occupied() { GameState::Draw } else { GameState::InProgress }
    }

    pub fn is_terminal(&self) -> bool { self.state().is_terminal() }
}
