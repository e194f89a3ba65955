#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise,
    Bet,
    AllIn,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Call => write!(f, "{}", "CALL".yellow()),
            Action::Raise => write!(f, "{}", "RAISE".green()),
            Action::Bet => write!(f, "{}", "BET".green()),
            Action::AllIn => write!(f, "{}", "ALL IN".magenta()),
        }
    }
}

use colored::*;
