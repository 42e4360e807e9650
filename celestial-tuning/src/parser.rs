use crate::angle::Angle;
use crate::catalog::StarPairRecord;
use crate::error::{Error, Result};

/// Parse a tuning-pair catalog.
///
/// Each pair is two non-blank lines:
///
/// ```text
/// <acq_id>   <RA HH:MM:SS> <Dec ±DD:MM:SS> <acq_vmag>   <separation_arcmin>
/// <guide_id> <ignored>     <ignored>       <guide_vmag> <position_angle_deg>
/// ```
///
/// Blank lines and `#` comments are skipped. Any malformed pair fails the
/// whole catalog; no partial result is returned.
pub fn parse_catalog(content: &str) -> Result<Vec<StarPairRecord>> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .collect();

    if lines.len() % 2 != 0 {
        let (line_no, _) = lines[lines.len() - 1];
        return Err(Error::Parse(format!(
            "line {}: pair has no guide star line",
            line_no
        )));
    }

    lines
        .chunks_exact(2)
        .map(|pair| parse_pair(pair[0], pair[1]))
        .collect()
}

fn parse_pair(acq: (usize, &str), guide: (usize, &str)) -> Result<StarPairRecord> {
    let (acq_no, acq_line) = acq;
    let (guide_no, guide_line) = guide;
    let a = split_fields(acq_line, acq_no)?;
    let g = split_fields(guide_line, guide_no)?;

    let at = |e: Error, line_no: usize| match e {
        Error::Parse(msg) => Error::Parse(format!("line {}: {}", line_no, msg)),
        other => other,
    };

    Ok(StarPairRecord {
        acq_id: a[0].to_string(),
        guide_id: g[0].to_string(),
        ra: parse_ra_hms(a[1]).map_err(|e| at(e, acq_no))?,
        dec: parse_dec_dms(a[2]).map_err(|e| at(e, acq_no))?,
        acq_vmag: parse_f64(a[3], "acq_vmag").map_err(|e| at(e, acq_no))?,
        separation_arcmin: parse_f64(a[4], "separation").map_err(|e| at(e, acq_no))?,
        guide_vmag: parse_f64(g[3], "guide_vmag").map_err(|e| at(e, guide_no))?,
        position_angle_deg: parse_f64(g[4], "position_angle").map_err(|e| at(e, guide_no))?,
    })
}

fn split_fields(line: &str, line_no: usize) -> Result<Vec<&str>> {
    let p: Vec<&str> = line.split_whitespace().collect();
    if p.len() < 5 {
        return Err(Error::Parse(format!(
            "line {}: pair line needs 5 fields, got {}",
            line_no,
            p.len()
        )));
    }
    Ok(p)
}

/// `HH:MM:SS[.s]` right ascension, must land in `[0, 24)` hours.
pub fn parse_ra_hms(s: &str) -> Result<Angle> {
    let (negative, h, m, sec) = split_sexagesimal(s, ':', "ra")?;
    let hours = h + m / 60.0 + sec / 3600.0;
    if negative || !(0.0..24.0).contains(&hours) {
        return Err(Error::Parse(format!("ra out of range [0, 24): {}", s)));
    }
    Ok(Angle::from_hours(hours))
}

/// `±DD:MM:SS[.s]` declination. The sign of the degrees field applies to the
/// minutes and seconds too, so `-00:30:00` is -0.5 degrees.
pub fn parse_dec_dms(s: &str) -> Result<Angle> {
    let (negative, d, m, sec) = split_sexagesimal(s, ':', "dec")?;
    let deg = signed(negative, d + m / 60.0 + sec / 3600.0);
    if !(-90.0..=90.0).contains(&deg) {
        return Err(Error::Parse(format!("dec out of range [-90, 90]: {}", s)));
    }
    Ok(Angle::from_degrees(deg))
}

/// Site coordinate in `±DDdMMmSS.sss s` form, e.g. `-30d14m26.700s`.
pub fn parse_site_angle(s: &str) -> Result<Angle> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_suffix('s')
        .ok_or_else(|| Error::Parse(format!("site angle must end in 's': {}", s)))?;
    let (d, rest) = body
        .split_once('d')
        .ok_or_else(|| Error::Parse(format!("site angle missing 'd': {}", s)))?;
    let (m, sec) = rest
        .split_once('m')
        .ok_or_else(|| Error::Parse(format!("site angle missing 'm': {}", s)))?;
    let negative = d.trim_start().starts_with('-');
    let deg = parse_f64(d, "site_d")?.abs();
    let min = parse_component(m, "site_m")?;
    let secs = parse_component(sec, "site_s")?;
    Ok(Angle::from_degrees(signed(negative, deg + min / 60.0 + secs / 3600.0)))
}

/// LST as delivered by the control system (`HH:MM:SS.s`) or as decimal hours.
pub fn parse_lst_text(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    let hours = if trimmed.contains(':') {
        let (negative, h, m, sec) = split_sexagesimal(trimmed, ':', "lst")?;
        signed(negative, h + m / 60.0 + sec / 3600.0)
    } else {
        parse_f64(trimmed, "lst_hours")?
    };
    validate_lst_hours(hours)?;
    Ok(hours)
}

/// LST entered as `h m s` words or a single decimal/colon value.
pub fn parse_lst_args(args: &[&str]) -> Result<f64> {
    match args.len() {
        1 => parse_lst_text(args[0]),
        3 => {
            let h = parse_f64(args[0], "lst_h")?;
            let m = parse_component(args[1], "lst_m")?;
            let s = parse_component(args[2], "lst_s")?;
            let hours = h + m / 60.0 + s / 3600.0;
            validate_lst_hours(hours)?;
            Ok(hours)
        }
        _ => Err(Error::Parse(
            "LST expects decimal hours (14.5), HH:MM:SS (14:30:00) or h m s (14 30 00)".into(),
        )),
    }
}

fn validate_lst_hours(hours: f64) -> Result<()> {
    if !(0.0..24.0).contains(&hours) {
        return Err(Error::Parse(format!(
            "LST must be in range [0, 24), got {}",
            hours
        )));
    }
    Ok(())
}

fn split_sexagesimal(s: &str, sep: char, field: &str) -> Result<(bool, f64, f64, f64)> {
    let parts: Vec<&str> = s.trim().split(sep).collect();
    if parts.len() != 3 {
        return Err(Error::Parse(format!(
            "{}: expected 3 '{}'-separated fields, got: {}",
            field, sep, s
        )));
    }
    let negative = parts[0].trim_start().starts_with('-');
    let whole = parse_f64(parts[0], field)?.abs();
    let m = parse_component(parts[1], field)?;
    let sec = parse_component(parts[2], field)?;
    Ok((negative, whole, m, sec))
}

/// Minutes or seconds: unsigned and below 60.
fn parse_component(s: &str, field: &str) -> Result<f64> {
    let v = parse_f64(s, field)?;
    if !(0.0..60.0).contains(&v) || s.trim_start().starts_with('-') {
        return Err(Error::Parse(format!("{}: component out of range [0, 60): {}", field, s)));
    }
    Ok(v)
}

fn signed(negative: bool, magnitude: f64) -> f64 {
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn parse_f64(s: &str, field: &str) -> Result<f64> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::Parse(format!("{}: {} ({})", field, e, s)))?;
    if !v.is_finite() {
        return Err(Error::Parse(format!("{}: not finite ({})", field, s)));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TWO_PAIRS: &str = "\
HD38393   05:44:27.79 -22:26:54.2  3.6  6.52
HD38392   05:44:26.5  -22:25:18.0  6.1 318.4

HD61421   07:39:18.12 +05:13:29.9  0.4 12.01
HD61573   07:40:01.0  +05:02:11.0  8.8 201.7
";

    #[test]
    fn parses_two_pairs_in_order() {
        let recs = parse_catalog(TWO_PAIRS).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].acq_id, "HD38393");
        assert_eq!(recs[0].guide_id, "HD38392");
        assert_eq!(recs[1].acq_id, "HD61421");
        assert_eq!(recs[1].guide_id, "HD61573");
    }

    #[test]
    fn fields_come_from_the_right_line() {
        let recs = parse_catalog(TWO_PAIRS).unwrap();
        let r = &recs[0];
        assert_eq!(r.acq_vmag, 3.6);
        assert_eq!(r.separation_arcmin, 6.52);
        assert_eq!(r.guide_vmag, 6.1);
        assert_eq!(r.position_angle_deg, 318.4);
    }

    #[test]
    fn ra_and_dec_converted() {
        let recs = parse_catalog(TWO_PAIRS).unwrap();
        let r = &recs[0];
        assert_abs_diff_eq!(r.ra_hours(), 5.0 + 44.0 / 60.0 + 27.79 / 3600.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            r.dec_degrees(),
            -(22.0 + 26.0 / 60.0 + 54.2 / 3600.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn ra_half_hour() {
        assert_abs_diff_eq!(parse_ra_hms("05:30:00").unwrap().hours(), 5.5, epsilon = 1e-12);
    }

    #[test]
    fn dec_negative_subtracts_minutes_and_seconds() {
        let dec = parse_dec_dms("-30:14:26.7").unwrap();
        assert_abs_diff_eq!(dec.degrees(), -30.2408, epsilon = 1e-4);
    }

    #[test]
    fn dec_negative_zero_degrees_keeps_sign() {
        let dec = parse_dec_dms("-00:30:00").unwrap();
        assert_abs_diff_eq!(dec.degrees(), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn dec_plus_sign_accepted() {
        let dec = parse_dec_dms("+45:00:00").unwrap();
        assert_abs_diff_eq!(dec.degrees(), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn ra_out_of_range_rejected() {
        assert!(parse_ra_hms("24:00:00").is_err());
        assert!(parse_ra_hms("-01:00:00").is_err());
        assert!(parse_ra_hms("10:61:00").is_err());
    }

    #[test]
    fn dec_out_of_range_rejected() {
        assert!(parse_dec_dms("+90:00:01").is_err());
        assert!(parse_dec_dms("-91:00:00").is_err());
        assert!(parse_dec_dms("45:00:60").is_err());
    }

    #[test]
    fn malformed_sexagesimal_rejected() {
        assert!(parse_ra_hms("05:30").is_err());
        assert!(parse_ra_hms("5h30m00s").is_err());
        assert!(parse_dec_dms("ab:cd:ef").is_err());
    }

    #[test]
    fn odd_line_count_fails_whole_catalog() {
        let text = "\
HD1 05:00:00 -30:00:00 4.0 5.0
HD1G 0 0 7.0 90.0
HD2 06:00:00 -20:00:00 5.0 6.0
";
        match parse_catalog(text) {
            Err(Error::Parse(msg)) => assert!(msg.contains("line 3")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn bad_number_fails_whole_catalog() {
        let text = "\
HD1 05:00:00 -30:00:00 4.0 5.0
HD1G 0 0 7.0 90.0
HD2 06:00:00 -20:00:00 bright 6.0
HD2G 0 0 7.0 90.0
";
        assert!(parse_catalog(text).is_err());
    }

    #[test]
    fn short_guide_line_fails() {
        let text = "\
HD1 05:00:00 -30:00:00 4.0 5.0
HD1G 0 0 7.0
";
        match parse_catalog(text) {
            Err(Error::Parse(msg)) => assert!(msg.contains("line 2")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn comments_and_blanks_skipped() {
        let text = "# tuning pairs\n\n".to_string() + TWO_PAIRS + "\n\n";
        assert_eq!(parse_catalog(&text).unwrap().len(), 2);
    }

    #[test]
    fn empty_catalog_is_empty() {
        assert!(parse_catalog("").unwrap().is_empty());
    }

    #[test]
    fn site_latitude_gemini_south() {
        let lat = parse_site_angle("-30d14m26.700s").unwrap();
        assert_abs_diff_eq!(lat.degrees(), -30.240750, epsilon = 1e-6);
    }

    #[test]
    fn site_longitude_gemini_south() {
        let lon = parse_site_angle("-70d44m12.096s").unwrap();
        assert_abs_diff_eq!(lon.degrees(), -70.736693, epsilon = 1e-6);
    }

    #[test]
    fn site_angle_positive() {
        let a = parse_site_angle("+19d49m20.000s").unwrap();
        assert_abs_diff_eq!(a.degrees(), 19.0 + 49.0 / 60.0 + 20.0 / 3600.0, epsilon = 1e-12);
    }

    #[test]
    fn site_angle_malformed() {
        assert!(parse_site_angle("-30:14:26.7").is_err());
        assert!(parse_site_angle("-30d14m26.7").is_err());
    }

    #[test]
    fn lst_text_sexagesimal() {
        let h = parse_lst_text("10:30:00.0").unwrap();
        assert_abs_diff_eq!(h, 10.5, epsilon = 1e-12);
    }

    #[test]
    fn lst_text_decimal() {
        assert_eq!(parse_lst_text(" 14.25\n").unwrap(), 14.25);
    }

    #[test]
    fn lst_text_out_of_range() {
        assert!(parse_lst_text("24:00:00").is_err());
        assert!(parse_lst_text("-1.0").is_err());
    }

    #[test]
    fn lst_args_forms() {
        assert_eq!(parse_lst_args(&["14", "30", "00"]).unwrap(), 14.5);
        assert_eq!(parse_lst_args(&["14.5"]).unwrap(), 14.5);
        assert_eq!(parse_lst_args(&["14:30:00"]).unwrap(), 14.5);
        assert!(parse_lst_args(&["14", "30"]).is_err());
    }
}
