use chrono::{DateTime, Utc, TimeZone};

use super::{Tag, DerResult, FromTlv};
use super::DerErrorKind::{InvalidTag, InvalidVal};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Time {
    pub time: DateTime<Utc>,
}

impl FromTlv for Time {
    fn from_tlv(tag: Tag, value: &[u8]) -> DerResult<Time> {
        let val = match tag {
            Tag::UtcTime => Time::from_utc_time(value),
            Tag::GeneralizedTime => Time::from_gen_time(value),
            _ => return der_err!(InvalidTag, "unexpected tag: {:?}", tag),
        };
        match val {
            Some(val) => Ok(val),
            None => der_err!(InvalidVal, "invalid Time value: {:?}", String::from_utf8_lossy(value)),
        }
    }
}

impl Time {
    // value: YYMMDDhhmmss
    fn from_date(y: &[u8], r: &[u8]) -> Option<Time> {
        macro_rules! s(
            ($v:ident, $i:expr) => ({
                let val0 = $v[$i];
                let val1 = $v[$i + 1];
                if !val0.is_ascii_digit() || !val1.is_ascii_digit() {
                    return None;
                }
                ((val0 - b'0') * 10 + (val1 - b'0')) as u32
            })
        );

        let year = s!(y, 0) as i32;
        let year = if y.len() == 4 {
            year * 100 + (s!(y, 2) as i32)
        } else if year >= 50 {
            // RFC 5280 4.1.2.5.1
            year + 1900
        } else {
            year + 2000
        };

        let month = s!(r, 0);
        let day = s!(r, 2);
        let hour = s!(r, 4);
        let min = s!(r, 6);
        let sec = s!(r, 8);

        // hhmmss == '240000' is not permitted
        if hour == 24 {
            return None;
        }

        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
           .single()
           .map(|time| Time { time })
    }

    fn from_gen_time(value: &[u8]) -> Option<Time> {
        let len = value.len();
        if len != 15 {
            return None;
        }

        if value[14] != b'Z' {
            return None;
        }

        Time::from_date(&value[..4], &value[4..14])
    }

    fn from_utc_time(value: &[u8]) -> Option<Time> {
        let len = value.len();
        if len != 13 {
            return None;
        }

        if value[12] != b'Z' {
            return None;
        }

        Time::from_date(&value[..2], &value[2..12])
    }
}

#[cfg(test)]
mod test {
    use chrono::{Datelike, Timelike};

    use super::Time;
    use crate::der::{Tag, FromTlv, DerResult};
    use crate::der::DerErrorKind::{InvalidTag, InvalidVal};

    fn parse(tag: Tag, value: &[u8]) -> DerResult<Time> {
        FromTlv::from_tlv(tag, value)
    }

    #[test]
    fn test_utc_time_pivot() {
        let t = parse(Tag::UtcTime, b"490101000000Z").unwrap();
        assert_eq!(t.time.year(), 2049);

        let t = parse(Tag::UtcTime, b"500101000000Z").unwrap();
        assert_eq!(t.time.year(), 1950);
    }

    #[test]
    fn test_gen_time() {
        let t = parse(Tag::GeneralizedTime, b"20340101123456Z").unwrap();
        assert_eq!((t.time.year(), t.time.month(), t.time.day()), (2034, 1, 1));
        assert_eq!((t.time.hour(), t.time.minute(), t.time.second()), (12, 34, 56));
    }

    #[test]
    fn test_invalid_time() {
        assert_err!(parse(Tag::UtcTime, b"240101240000Z"), InvalidVal);
        assert_err!(parse(Tag::UtcTime, b"240230000000Z"), InvalidVal);
        assert_err!(parse(Tag::UtcTime, b"2401010000Z"), InvalidVal);
        assert_err!(parse(Tag::UtcTime, b"240101000000+"), InvalidVal);
        assert_err!(parse(Tag::UtcTime, b"24o101000000Z"), InvalidVal);
        assert_err!(parse(Tag::Integer, b"240101000000Z"), InvalidTag);
    }
}
