use std::io::{BufRead, Write};

use crate::{
    currency::CurrencyFormat,
    form::{self, Field, TipForm},
};

/// Prompts for each field of the tip screen in order and prints the tip after every change.
///
/// Stops early at end of input and returns the form as filled so far.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    format: &CurrencyFormat,
) -> anyhow::Result<TipForm> {
    let mut form = TipForm::new();
    writeln!(output, "{}", form::CALCULATE_TIP)?;

    for field in Field::ALL {
        match field {
            Field::RoundUp => write!(output, "{} [y/N]: ", field.label())?,
            _ => write!(output, "{}: ", field.label())?,
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!(?field, "End of input");
            writeln!(output)?;
            break;
        }

        form.apply(field, &line);
        tracing::debug!(?field, value = %line.trim(), "Field updated");
        writeln!(output, "{}", form.label(format))?;
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::currency::CurrencyFormat;

    use super::run;

    #[test]
    fn fills_every_field() {
        let mut output = Vec::new();
        let form = run(Cursor::new("30\n27\ny\n"), &mut output, &CurrencyFormat::EN_US).unwrap();

        assert_eq!(form.amount(), 30.0);
        assert_eq!(form.tip_percent(), 27.0);
        assert!(form.round_up());
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Calculate Tip\n\
             Bill Amount: Tip Amount: $0.00\n\
             Tip Percentage: Tip Amount: $8.10\n\
             Round up tip? [y/N]: Tip Amount: $9.00\n"
        );
    }

    #[test]
    fn end_of_input() {
        let mut output = Vec::new();
        let form = run(Cursor::new("10\n"), &mut output, &CurrencyFormat::EN_US).unwrap();

        assert_eq!(form.amount(), 10.0);
        assert_eq!(form.tip_percent(), 0.0);
        assert!(!form.round_up());
        assert!(String::from_utf8(output).unwrap().ends_with("Tip Percentage: \n"));
    }

    #[test]
    fn unparseable_entries() {
        let mut output = Vec::new();
        let form = run(Cursor::new("abc\n25\n\n"), &mut output, &CurrencyFormat::EN_US).unwrap();

        assert_eq!(form.tip(&CurrencyFormat::EN_US), "$0.00");
    }
}
