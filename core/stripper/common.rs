#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    #[error("non-ASCII byte 0x{byte:02x} at offset {offset}")]
    NonAscii { offset: usize, byte: u8 },

    #[error("match span {from}..{to} out of bounds for input of length {len}")]
    SpanOutOfBounds { from: usize, to: usize, len: usize },

    #[error("match span starting at {from} overlaps previous span ending at {last_to}")]
    OverlappingSpans { from: usize, last_to: usize },
}

/// Byte span of one annotation occurrence, `from` inclusive, `to` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationMatch {
    pub from: usize,
    pub to: usize,
}

impl From<regex::Match<'_>> for AnnotationMatch {
    fn from(m: regex::Match<'_>) -> Self {
        AnnotationMatch {
            from: m.start(),
            to: m.end(),
        }
    }
}

/// Deletes every span from `input`. Spans may arrive in any order but must not overlap.
pub fn remove_matches(
    mut input: String,
    mut matches: Vec<AnnotationMatch>,
) -> Result<String, StripError> {
    if matches.is_empty() {
        return Ok(input);
    }
    check_matches_bounds(&input, &matches)?;

    matches.sort_by_key(|m| m.from);
    check_sorted_matches_overlap(&matches)?;
    matches.reverse();

    for m in matches {
        input.drain(m.from..m.to);
    }
    Ok(input)
}

pub fn decode_ascii(bytes: Vec<u8>) -> Result<String, StripError> {
    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(StripError::NonAscii {
            offset,
            byte: bytes[offset],
        });
    }
    Ok(bytes.into_iter().map(char::from).collect())
}

pub(crate) fn ensure_ascii(text: &str) -> Result<(), StripError> {
    match text.bytes().position(|b| !b.is_ascii()) {
        Some(offset) => Err(StripError::NonAscii {
            offset,
            byte: text.as_bytes()[offset],
        }),
        None => Ok(()),
    }
}

fn check_matches_bounds(input: &str, matches: &[AnnotationMatch]) -> Result<(), StripError> {
    let len = input.len();
    for m in matches {
        if m.from > len || m.to > len || m.from > m.to || !input.is_char_boundary(m.from) {
            return Err(StripError::SpanOutOfBounds {
                from: m.from,
                to: m.to,
                len,
            });
        }
    }
    Ok(())
}

fn check_sorted_matches_overlap(matches: &[AnnotationMatch]) -> Result<(), StripError> {
    let mut last_to = 0;
    for m in matches {
        if m.from < last_to {
            return Err(StripError::OverlappingSpans {
                from: m.from,
                last_to,
            });
        }
        last_to = m.to;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(from: usize, to: usize) -> AnnotationMatch {
        AnnotationMatch { from, to }
    }

    #[test]
    fn removes_unsorted_spans() {
        let out = remove_matches("a@Xb@Yc".to_string(), vec![span(4, 6), span(1, 3)]).unwrap();
        assert_eq!(out, "abc");
    }

    #[test]
    fn rejects_out_of_bounds_span() {
        let err = remove_matches("abc".to_string(), vec![span(1, 9)]).unwrap_err();
        assert_eq!(
            err,
            StripError::SpanOutOfBounds {
                from: 1,
                to: 9,
                len: 3
            }
        );
    }

    #[test]
    fn rejects_overlapping_spans() {
        let err = remove_matches("abcdef".to_string(), vec![span(0, 3), span(2, 4)]).unwrap_err();
        assert_eq!(err, StripError::OverlappingSpans { from: 2, last_to: 3 });
    }

    #[test]
    fn decode_reports_first_non_ascii_byte() {
        let err = decode_ascii(b"int x; // caf\xc3\xa9".to_vec()).unwrap_err();
        assert_eq!(
            err,
            StripError::NonAscii {
                offset: 13,
                byte: 0xc3
            }
        );
    }

    #[test]
    fn decode_accepts_plain_ascii() {
        assert_eq!(decode_ascii(b"class A {}\n".to_vec()).unwrap(), "class A {}\n");
    }

    #[test]
    fn decode_keeps_every_ascii_byte() {
        let bytes: Vec<u8> = (0u8..=0x7f).collect();
        let text = decode_ascii(bytes.clone()).unwrap();
        assert_eq!(text.as_bytes(), bytes.as_slice());
    }
}
