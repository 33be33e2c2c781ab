use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stack_u16::StackU16;
use std::io::{self, Read, Write};

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Mode {
    /// Read whitespace-separated hex words from stdin and write their
    /// byte-pair encoding to stdout.
    Encode,
    /// Read a byte-pair encoding from stdin and print the decoded stack.
    Decode,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!("mode: {:?}", args.mode);

    let mut input = vec![];
    io::stdin()
        .read_to_end(&mut input)
        .context("reading stdin")?;

    match args.mode {
        Mode::Encode => {
            let text = String::from_utf8(input).context("input is not UTF-8")?;
            let stack = parse_words(&text)?;
            log::info!("encoding {} words", stack.len());
            io::stdout()
                .write_all(&stack.encode())
                .context("writing stdout")?;
        }
        Mode::Decode => {
            let stack = StackU16::decode(&input);
            log::info!("decoded {} words from {} bytes", stack.len(), input.len());
            print!("{stack:#?}");
        }
    }

    Ok(())
}

/// Push each hex word of `text` (with or without a `0x` prefix) in order.
/// Words wider than 16 bits wrap, the same as `StackU16::push`.
fn parse_words(text: &str) -> Result<StackU16> {
    let mut stack = StackU16::new();
    for token in text.split_whitespace() {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let value = u32::from_str_radix(digits, 16)
            .with_context(|| format!("invalid hex word: {token:?}"))?;
        stack.push(value);
    }
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_accepts_prefixes_and_wraps() {
        let stack = parse_words("ff00 0x00ff\n0XF00F\t10000").unwrap();
        assert_eq!(stack.as_slice(), &[0xff00, 0x00ff, 0xf00f, 0]);
    }

    #[test]
    fn parse_words_empty_input() {
        assert!(parse_words("  \n").unwrap().is_empty());
    }

    #[test]
    fn parse_words_rejects_garbage() {
        let err = parse_words("12 zz").unwrap_err();
        assert!(err.to_string().contains("\"zz\""));
    }
}
