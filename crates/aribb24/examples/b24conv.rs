use std::path::PathBuf;

use aribb24::eight::decode::Options;
use aribb24::{AribStr, AribString};

const HELP: &str = "\
8単位符号を変換するコマンド

USAGE:
  b24conv decode [--arib] <HEX>
  b24conv decode [--arib] --file <PATH>
  b24conv encode [--arib] <TEXT>

FLAGS:
  -h, --help   このヘルプを表示する
  --arib       放送の初期状態（G0に漢字、GRにG2）で変換する

OPTIONS:
  --file PATH  デコードする8単位符号を読み込むファイルのパス

ARGS:
  <HEX>        デコードする8単位符号の16進表記（空白は無視する）
  <TEXT>       エンコードする文字列
";

enum Command {
    Decode { input: Input },
    Encode { text: String },
}

enum Input {
    Hex(String),
    File(PathBuf),
}

struct Args {
    command: Command,
    options: Options,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let options = if args.contains("--arib") {
        Options::ARIB
    } else {
        Options::DEFAULT
    };

    let command = match args.subcommand()?.as_deref() {
        Some("decode") => {
            let input = match args.opt_value_from_str("--file")? {
                Some(path) => Input::File(path),
                None => Input::Hex(args.free_from_str()?),
            };
            Command::Decode { input }
        }
        Some("encode") => Command::Encode {
            text: args.free_from_str()?,
        },
        Some(cmd) => return Err(format!("unknown command: {}", cmd).into()),
        None => {
            print!("{}", HELP);
            std::process::exit(1);
        }
    };

    Ok(Args { command, options })
}

fn parse_hex(s: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("odd number of hex digits".into());
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8, Box<dyn std::error::Error>> {
            let pair = std::str::from_utf8(pair)?;
            Ok(u8::from_str_radix(pair, 16)?)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    env_logger::init();

    match args.command {
        Command::Decode { input } => {
            let bytes = match input {
                Input::Hex(hex) => parse_hex(&hex)?,
                Input::File(path) => std::fs::read(path)?,
            };
            let s = AribStr::from_bytes(&bytes);
            match s.try_to_string(args.options) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    println!("{}", s.to_string(args.options));
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Command::Encode { text } => {
            let (s, n) = AribString::encode(&text, args.options);
            let hex: Vec<String> = s.as_bytes().iter().map(|b| format!("{:02X}", b)).collect();
            println!("{}", hex.join(" "));
            println!("{}/{} chars", n, text.chars().count());
        }
    }

    Ok(())
}
