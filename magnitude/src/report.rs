use std::fmt::Write;

use crate::Fits;

/// Render fitted samples and their curves as CSV, for graphing elsewhere.
///
/// One header row, then one row per sample: its size, its time, then every
/// fitted curve's value at that size (in catalogue order).
pub fn to_csv(fits: &Fits) -> String {
    let mut out = String::from("Job Size,Time");
    for (form, _) in fits.iter() {
        out.push(',');
        out.push_str(form.title());
    }
    out.push('\n');

    // Every curve has one row per fitted sample.
    for (i, sample) in fits.samples().iter().enumerate() {
        // Writing into a String can't fail.
        let _ = write!(out, "{},{}", sample.size, sample.seconds);
        for (_, curve) in fits.iter() {
            let _ = write!(out, ",{}", curve.values.get(i, 0));
        }
        out.push('\n');
    }
    out
}
