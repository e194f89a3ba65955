#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const fn all() -> &'static [Self] {
        &[
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
        ]
    }
    /// face value 2..=14, Ace high
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }
    /// inverse of value(). Ace-low input (1) lands on Ace
    pub const fn lift(value: u8) -> Self {
        match value {
            1 | 14 => Rank::Ace,
            v => Self::from_index(v - 2),
        }
    }
    const fn from_index(n: u8) -> Self {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("invalid rank index"),
        }
    }
}

/// u8 isomorphism over deck index 0..13
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        Self::from_index(n)
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 injection, one bit per rank
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u64 injection, the 4-card nibble of this rank in a 52-bit Hand
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

impl std::str::FromStr for Rank {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "t" | "10" => Ok(Rank::Ten),
            "J" | "j" | "11" => Ok(Rank::Jack),
            "Q" | "q" | "12" => Ok(Rank::Queen),
            "K" | "k" | "13" => Ok(Rank::King),
            "A" | "a" | "1" | "14" => Ok(Rank::Ace),
            _ => Err(anyhow::anyhow!("invalid rank: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Rank::Five) == 0b1111000000000000);
    }

    #[test]
    fn ace_low_lift() {
        assert_eq!(Rank::lift(1), Rank::Ace);
        assert_eq!(Rank::lift(14), Rank::Ace);
        assert_eq!(Rank::lift(2), Rank::Two);
    }

    #[test]
    fn parse_numerals() {
        assert_eq!("1".parse::<Rank>().unwrap(), Rank::Ace);
        assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
        assert_eq!("K".parse::<Rank>().unwrap(), Rank::King);
        assert!("15".parse::<Rank>().is_err());
    }
}
