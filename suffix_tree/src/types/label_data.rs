use std::cmp::Ordering;
use std::fmt;

// A symbol of the text the tree is built over. The separator
// is its own variant rather than a reserved byte, so it is
// unique against *any* input, including binary files that
// use every one of the 256 byte values. Appending it to the
// text turns the implicit suffix tree into an explicit one,
// since no suffix can then be a prefix of another suffix.
#[derive(Copy, Clone)]
pub enum LabelData {
  Byte(u8),
  Sep,
}

// The separator as printed in output
static SEP: &str = "<$>";
impl LabelData {
  pub fn new(b: u8) -> Self {
    LabelData::Byte(b)
  }

  pub fn as_readable(&self) -> Vec<u8> {
    match self {
      Self::Byte(b) => vec![*b],
      Self::Sep => SEP.as_bytes().to_vec(),
    }
  }
}

impl PartialEq for LabelData {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Byte(b1), Self::Byte(b2)) => b1 == b2,
      (Self::Sep, Self::Sep) => true,
      _ => false,
    }
  }
}

impl PartialEq<u8> for LabelData {
  fn eq(&self, other: &u8) -> bool {
    match (self, other) {
      (Self::Byte(b1), b2) => b1 == b2,
      _ => false,
    }
  }
}

impl PartialEq<LabelData> for u8 {
  fn eq(&self, other: &LabelData) -> bool {
    match (self, other) {
      (b1, LabelData::Byte(b2)) => b1 == b2,
      _ => false,
    }
  }
}

impl Eq for LabelData {}

impl Ord for LabelData {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      // The separator is "first" in the ordering, i.e.
      // the lowest value. Otherwise the byte values
      // are just compared to each other
      (Self::Byte(b1), Self::Byte(b2)) => b1.cmp(b2),
      (Self::Sep, Self::Sep) => Ordering::Equal,
      (Self::Byte(_), Self::Sep) => Ordering::Greater,
      (Self::Sep, Self::Byte(_)) => Ordering::Less,
    }
  }
}

impl PartialOrd for LabelData {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Debug for LabelData {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Byte(b) if b.is_ascii_graphic() => write!(f, "{}", *b as char),
      Self::Byte(b) => write!(f, "\\x{:02x}", b),
      Self::Sep => write!(f, "{}", SEP),
    }
  }
}
