use {
    crate::house_range::{HouseRange, Parity},
    lazy_static::lazy_static,
    regex::Regex,
};

// Recognized phrasings, tried in order; a source matching none of them is
// treated as a comma-separated enumeration of house identifiers.
lazy_static! {
    static ref EVEN_THEN_ODD: Regex =
        Regex::new(r#"(?i)четные *(?P<even>\d+[+-]\d*)\W*нечетные *(?P<odd>\d+[+-]\d*)"#).unwrap();
    static ref ODD_THEN_EVEN: Regex =
        Regex::new(r#"(?i)нечетные *(?P<odd>\d+[+-]\d*)\W*четные *(?P<even>\d+[+-]\d*)"#).unwrap();
    static ref EVEN_TO_END: Regex =
        Regex::new(r#"(?i)^четные *с *(?P<from>\d+) *и *вся *улица *до *конца$"#).unwrap();
    static ref ODD_TO_END: Regex =
        Regex::new(r#"(?i)^нечетные *с *(?P<from>\d+) *и *вся *улица *до *конца$"#).unwrap();
    static ref RANGE_BORDERS: Regex =
        Regex::new(r#"(?P<from>\d+)(?P<sep>[+-])(?P<to>\d+)?"#).unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed decoding border numbers from range fragment {0:?}")]
    RangeDecode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeDescription {
    EvenOdd { even: HouseRange, odd: HouseRange },
    SingleParity { parity: Parity, range: HouseRange },
    Enumeration { houses: Vec<String>, range: Option<HouseRange> },
}

impl RangeDescription {
    pub fn from_source(source: &str) -> Result<Self> {
        if let Some(captures) = EVEN_THEN_ODD
            .captures(source)
            .or_else(|| ODD_THEN_EVEN.captures(source))
        {
            log::debug!("Source matched the even/odd ranges pattern");
            return Ok(RangeDescription::EvenOdd {
                even: decode_borders(&captures["even"])?,
                odd: decode_borders(&captures["odd"])?,
            });
        }

        if let Some(captures) = EVEN_TO_END.captures(source) {
            log::debug!("Source matched the even street-end pattern");
            return Ok(RangeDescription::SingleParity {
                parity: Parity::Even,
                range: open_ended_from(&captures["from"])?,
            });
        }

        if let Some(captures) = ODD_TO_END.captures(source) {
            log::debug!("Source matched the odd street-end pattern");
            return Ok(RangeDescription::SingleParity {
                parity: Parity::Odd,
                range: open_ended_from(&captures["from"])?,
            });
        }

        log::debug!("Treating source as a plain house enumeration");
        Self::from_enumeration(source)
    }

    fn from_enumeration(source: &str) -> Result<Self> {
        let mut houses = Vec::new();
        let mut range = None;
        for token in source.split(", ") {
            if token.contains('-') {
                range = Some(decode_borders(token)?);
            } else {
                houses.push(token.to_string());
            }
        }
        Ok(RangeDescription::Enumeration { houses, range })
    }

    pub fn includes_house(&self, candidate: &str) -> bool {
        let number = candidate.parse::<u32>().ok();
        match self {
            RangeDescription::Enumeration { houses, range } => {
                if houses.iter().any(|house| house == candidate) {
                    return true;
                }
                match (number, range) {
                    (Some(number), Some(range)) => range.contains(number),
                    _ => false,
                }
            }
            RangeDescription::EvenOdd { even, odd } => number.map_or(false, |number| {
                Parity::Even.matches(number) && even.contains(number)
                    || Parity::Odd.matches(number) && odd.contains(number)
            }),
            RangeDescription::SingleParity { parity, range } => {
                number.map_or(false, |number| parity.matches(number) && range.contains(number))
            }
        }
    }
}

pub struct HousesParser {
    source: String,
}

impl HousesParser {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn is_house_included(&self, candidate: &str) -> Result<bool> {
        let description = RangeDescription::from_source(&self.source)?;
        log::debug!("Derived {:?} from source {:?}", description, self.source);
        Ok(description.includes_house(candidate))
    }
}

fn decode_borders(fragment: &str) -> Result<HouseRange> {
    let captures = RANGE_BORDERS
        .captures(fragment)
        .ok_or_else(|| Error::RangeDecode(fragment.into()))?;
    let from = captures["from"]
        .parse()
        .map_err(|_e| Error::RangeDecode(fragment.into()))?;
    if &captures["sep"] == "+" {
        return Ok(HouseRange::open(from));
    }
    let to = match captures.name("to") {
        Some(to) => to
            .as_str()
            .parse()
            .map_err(|_e| Error::RangeDecode(fragment.into()))?,
        None => return Err(Error::RangeDecode(fragment.into())),
    };
    Ok(HouseRange::closed(from, to))
}

fn open_ended_from(digits: &str) -> Result<HouseRange> {
    let from = digits
        .parse()
        .map_err(|_e| Error::RangeDecode(digits.into()))?;
    Ok(HouseRange::open(from))
}
