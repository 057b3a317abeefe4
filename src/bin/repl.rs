use jap_dice::{Int, RollContext, Roller};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        &mut RollContext::default(),
    )?;
    Ok(())
}

/// Rolls one notation per input line until the input ends or cannot be read.
fn run<R: Roller>(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    ctx: &mut RollContext<R>,
) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match jap_dice::parse(&line) {
                Ok(dice) => {
                    let mut dice_rolled: Vec<Int> = vec![];
                    let total = ctx.roll_with_observer(&dice, |x| dice_rolled.push(x));
                    let shown: Vec<_> = dice_rolled.iter().map(Int::to_string).collect();
                    writeln!(out, "{} ({}): [{}] = {}", dice, dice.variant(), shown.join(", "), total)?;
                }
                Err(why) => writeln!(err, "Error: {}", why)?,
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
