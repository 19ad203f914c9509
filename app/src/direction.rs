use std::fmt;

/// Text direction handed to feature components, rendered as the `dir` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn renders_as_dir_attribute_value() {
        assert_eq!(Direction::Ltr.to_string(), "ltr");
        assert_eq!(Direction::Rtl.as_str(), "rtl");
        assert_eq!(Direction::default(), Direction::Ltr);
    }
}
