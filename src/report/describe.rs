//! Natural-language model descriptions.
//!
//! These are fixed template sentences keyed purely off the fitted family (and,
//! for logarithmic fits, off the detected base in the rendered formula). No
//! numeric computation happens here; the caller supplies the axis names.

use crate::domain::{FitResult, ModelFamily};

/// A short prose description of the chosen model for the given axes.
pub fn describe_model(x_label: &str, y_label: &str, fit: &FitResult) -> String {
    let base = format!(
        "This is a {} function. ",
        fit.family.display_name().to_lowercase()
    );

    match fit.family {
        ModelFamily::Linear => format!(
            "{base}The data show a directly proportional relationship between \
             \"{x_label}\" and \"{y_label}\": for every unit increase along the \
             X axis, the Y axis changes by a constant, predictable amount."
        ),
        ModelFamily::Quadratic => format!(
            "{base}The behavior is parabolic. The change in \"{y_label}\" \
             accelerates (or decelerates) as \"{x_label}\" grows, tracing a \
             symmetric curve."
        ),
        ModelFamily::Logarithmic => {
            let detail = if fit.formula.contains("log₂") {
                "Each time X doubles, Y increases by one unit. "
            } else if fit.formula.contains("log₁₀") {
                "Each time X is multiplied by 10, Y increases by one unit. "
            } else {
                ""
            };
            format!(
                "{base}{detail}It represents a phenomenon that grows quickly at \
                 first but whose growth rate gradually levels off."
            )
        }
        ModelFamily::Exponential => format!(
            "{base}The values change extremely fast: \"{y_label}\" is multiplied \
             by a constant factor for each increment of \"{x_label}\", producing \
             accelerating growth or decay."
        ),
        ModelFamily::Power => format!(
            "{base}The relationship follows a power law: \"{y_label}\" is \
             proportional to a power of \"{x_label}\", which is common in \
             physical scaling laws."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SamplePoint;
    use crate::fit::fitter::{fit_linear, fit_logarithmic};

    #[test]
    fn substitutes_axis_labels() {
        let points = vec![
            SamplePoint { x: 0.0, y: 5.0 },
            SamplePoint { x: 2.0, y: 9.0 },
            SamplePoint { x: 5.0, y: 15.0 },
        ];
        let fit = fit_linear(&points);
        let text = describe_model("Distance", "Cost", &fit);
        assert!(text.starts_with("This is a linear function."));
        assert!(text.contains("\"Distance\""));
        assert!(text.contains("\"Cost\""));
    }

    #[test]
    fn base_two_logarithm_gets_the_doubling_sentence() {
        let points = vec![
            SamplePoint { x: 1.0, y: 1.0 },
            SamplePoint { x: 2.0, y: 2.0 },
            SamplePoint { x: 4.0, y: 3.0 },
            SamplePoint { x: 8.0, y: 4.0 },
        ];
        let fit = fit_logarithmic(&points);
        let text = describe_model("X", "Y", &fit);
        assert!(text.contains("Each time X doubles"));
    }
}
