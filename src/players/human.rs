use crate::*;
use dialoguer::Input;

/// Interactive player reading roll-or-stop from the terminal.
///
/// Anything that does not start with `r` or `s` is rejected and asked again.
#[derive(Debug, Default)]
pub struct Human;

impl Agent for Human {
    fn decide(&mut self, position: &Position) -> anyhow::Result<Decision> {
        println!("{}", position);
        let input = Input::<String>::new()
            .with_prompt(format!("{} Roll or Stop?", position.turn()))
            .validate_with(|i: &String| -> Result<(), String> {
                Decision::try_from(i.as_str())
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()?;
        Decision::try_from(input.as_str())
    }
}
