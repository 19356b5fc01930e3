use super::super::form::FormValue;

/// PSA in ng/mL. Text is read up to the first character that stops being a number,
/// so "4.2 ng/mL" reads as 4.2; anything without a leading number counts as zero.
pub(crate) fn parse_psa(raw: Option<&FormValue>) -> f64 {
    let value = match raw {
        Some(FormValue::Number(value)) => Some(*value),
        Some(FormValue::Text(text)) => leading_number(text),
        None => None,
    };
    value.filter(|value| value.is_finite()).unwrap_or(0.0)
}

fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    text.char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
}

/// Upper bounds are inclusive on every bracket except the open top one.
pub(crate) fn psa_points(psa: f64) -> u8 {
    if psa < 1.0 {
        0
    } else if psa <= 2.5 {
        5
    } else if psa <= 4.0 {
        10
    } else if psa <= 10.0 {
        20
    } else {
        40
    }
}

pub(crate) fn parse_pirads(raw: Option<&FormValue>) -> Option<i64> {
    raw.and_then(FormValue::as_integer)
}

/// Only an equivocal PI-RADS 3 adds points; 4 and 5 are handled as overrides.
pub(crate) fn pirads_points(score: Option<i64>) -> u8 {
    match score {
        Some(3) => 10,
        _ => 0,
    }
}
