use crate::{Grid, LifeError, Result};

fn invalid(message: impl Into<String>) -> LifeError {
    LifeError::InvalidRle(message.into())
}

/// Parses a pattern in RLE format into a grid of the declared size.
pub fn parse_rle(data: &[u8]) -> Result<Grid> {
    let parse_next_number = |i: &mut usize| -> Result<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(invalid("header must declare `x` and `y`"));
            }
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| invalid("expected a number"))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    if i >= data.len() || data[i] != b'x' {
        return Err(invalid("missing `x = .., y = ..` header"));
    }
    let width = parse_next_number(&mut i)?;
    let height = parse_next_number(&mut i)?;
    let mut result = Grid::blank(height, width)?;
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }

    // run-length encoded pattern data
    let overflow = || invalid("run count exceeds the declared size");
    let (mut x, mut y, mut cnt) = (0usize, 0usize, 1usize);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => {
                cnt = parse_next_number(&mut i)?;
                continue;
            }
            b'o' => {
                if x.checked_add(cnt).map_or(true, |end| end > width) || y >= height {
                    return Err(invalid(format!("row {y} exceeds the declared size")));
                }
                for _ in 0..cnt {
                    result.set(y, x, true);
                    x += 1;
                }
            }
            b'b' => x = x.checked_add(cnt).ok_or_else(overflow)?,
            b'$' => (x, y) = (0, y.checked_add(cnt).ok_or_else(overflow)?),
            b'!' => break,
            c if c.is_ascii_whitespace() => {}
            c => return Err(invalid(format!("unexpected symbol `{}`", c as char))),
        }
        if !data[i].is_ascii_whitespace() {
            cnt = 1;
        }
        i += 1;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLIDER: &[u8] = b"#N Glider\n#C A comment\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";

    #[test]
    fn test_parse_glider() {
        let grid = parse_rle(GLIDER).unwrap();
        assert_eq!(grid.size(), (3, 3));
        assert_eq!(
            grid.to_rows(),
            vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn test_parse_multiline_and_row_skips() {
        let data = b"x = 4, y = 4\n2o\n2$\n3bo!";
        let grid = parse_rle(data).unwrap();
        assert_eq!(grid.alive_cells(), vec![(0, 0), (0, 1), (2, 3)]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_rle(b"bo$ob!"), Err(LifeError::InvalidRle(_))));
        assert!(matches!(
            parse_rle(b"x = 2, y = 1\n3o!"),
            Err(LifeError::InvalidRle(_))
        ));
        assert!(matches!(
            parse_rle(b"x = 2, y = 2\nozo!"),
            Err(LifeError::InvalidRle(_))
        ));
        assert!(matches!(parse_rle(b"x = 0, y = 0\n!"), Err(LifeError::EmptyGrid)));
    }

    #[test]
    fn test_parse_oversized_header() {
        assert!(matches!(
            parse_rle(b"x = 18446744073709551615, y = 2\n!"),
            Err(LifeError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_parse_oversized_run_counts() {
        let huge = usize::MAX;
        for body in [
            format!("x = 2, y = 2\n{huge}bo!"),
            format!("x = 2, y = 2\nb{huge}o!"),
            format!("x = 2, y = 2\n$${huge}$o!"),
        ] {
            assert!(
                matches!(parse_rle(body.as_bytes()), Err(LifeError::InvalidRle(_))),
                "{}",
                body
            );
        }
    }
}
