//! Cookie-based visit counter.
//!
//! The client carries its own visit count in a `cookie_counter` cookie. The
//! server keeps no record of it, so a client can reset or forge the value at
//! will. Every successful response offers the next count back.

/// Cookie name holding the visit count.
pub const COOKIE_NAME: &str = "cookie_counter";

/// Visits allowed before requests are refused with 403.
pub const MAX_VISITS: u8 = 10;

/// Lifetime of the offered cookie, in seconds.
pub const COOKIE_MAX_AGE: u32 = 120;

/// Visit count presented with the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitCounter {
    current: u8,
}

impl VisitCounter {
    /// A client presenting no counter is on its first visit.
    pub const FIRST_VISIT: VisitCounter = VisitCounter { current: 1 };

    pub fn new(current: u8) -> Self {
        Self { current }
    }

    /// Scans raw header lines for a `Cookie` header holding
    /// `cookie_counter=<1 or 2 digits>`. The first match wins.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        headers
            .iter()
            .find_map(|line| counter_in_line(line.as_ref()))
            .map(Self::new)
            .unwrap_or(Self::FIRST_VISIT)
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    /// Value offered to the client for its next request.
    pub fn next(&self) -> u8 {
        self.current.saturating_add(1)
    }

    pub fn is_throttled(&self) -> bool {
        self.current >= MAX_VISITS
    }

    /// `Set-Cookie` value offering the next count.
    pub fn set_cookie_value(&self) -> String {
        format!("{}={}; Max-Age={}", COOKIE_NAME, self.next(), COOKIE_MAX_AGE)
    }
}

fn counter_in_line(line: &str) -> Option<u8> {
    let (name, value) = line.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("cookie") {
        return None;
    }

    value.split(';').find_map(|pair| {
        let (key, val) = pair.trim().split_once('=')?;
        if key.trim() != COOKIE_NAME {
            return None;
        }
        let val = val.trim();
        let short = (1..=2).contains(&val.len());
        if short && val.bytes().all(|b| b.is_ascii_digit()) {
            val.parse().ok()
        } else {
            None
        }
    })
}
