//! Headless console runner
//!
//! Drives the console core from a line-oriented command script and
//! prints the resulting snapshot, for testing and debugging without a
//! browser display.
//!
//! # Usage
//!
//! ```bash
//! # Apply a script from stdin and output a JSON snapshot
//! printf 'cell 0 0 A\ncursor 5 3\n' | canterm-headless
//!
//! # Apply a script from a file and output text
//! canterm-headless --input script.txt --text
//! ```
//!
//! Script commands, one per line (`#` starts a comment):
//!
//! ```text
//! resize <width> <height>         set the buffer size
//! window-pos <left> <top>         move the window
//! window-size <width> <height>    resize the window
//! cursor <left> <top>             move the cursor
//! cursor-size <percent>           set the cursor height
//! cursor-visible <true|false>     show or hide the cursor
//! cell <left> <top> <char>        write one cell in the current colors
//! move <left> <top> <width> <height> <target-left> <target-top>
//! color <foreground> <background> set the current colors by name
//! reset-color                     restore the default colors
//! clear                           clear the buffer
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use canterm::{Area, Cell, Color, Config, Coordinate, Size, Terminal};

/// Command-line arguments
struct Args {
    /// Input script (stdin if not specified)
    input: Option<PathBuf>,
    /// Output file (stdout if not specified)
    output: Option<PathBuf>,
    /// Output as text instead of JSON
    text: bool,
    /// Buffer and window columns
    width: usize,
    /// Buffer and window rows
    height: usize,
    /// Show help
    help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            text: false,
            width: 80,
            height: 25,
            help: false,
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                args.help = true;
            }
            "-i" | "--input" => {
                i += 1;
                if i < argv.len() {
                    args.input = Some(PathBuf::from(&argv[i]));
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < argv.len() {
                    args.output = Some(PathBuf::from(&argv[i]));
                }
            }
            "-t" | "--text" => {
                args.text = true;
            }
            "-c" | "--cols" => {
                i += 1;
                if i < argv.len() {
                    args.width = argv[i].parse().unwrap_or(80);
                }
            }
            "-r" | "--rows" => {
                i += 1;
                if i < argv.len() {
                    args.height = argv[i].parse().unwrap_or(25);
                }
            }
            _ => {}
        }
        i += 1;
    }

    args
}

fn print_help() {
    eprintln!(
        r#"canterm-headless - Headless console core for testing

USAGE:
    canterm-headless [OPTIONS]

OPTIONS:
    -h, --help              Show this help message
    -i, --input <FILE>      Input script (stdin if not specified)
    -o, --output <FILE>     Output file (stdout if not specified)
    -t, --text              Output as plain text instead of JSON
    -c, --cols <N>          Buffer columns (default: 80)
    -r, --rows <N>          Buffer rows (default: 25)

EXAMPLES:
    # Write a cell and output a JSON snapshot
    printf 'cell 0 0 A\n' | canterm-headless

    # Shift a row right by one column, output text
    printf 'move 0 0 5 1 1 0\n' | canterm-headless -t

    # Custom buffer size
    canterm-headless -c 120 -r 40 -i script.txt -o snapshot.json
"#
    );
}

fn field<'a>(parts: &'a [&str], i: usize, what: &str) -> Result<&'a str, String> {
    parts
        .get(i)
        .copied()
        .ok_or_else(|| format!("missing {what}"))
}

fn num(parts: &[&str], i: usize, what: &str) -> Result<usize, String> {
    field(parts, i, what)?
        .parse()
        .map_err(|_| format!("{what} is not a number"))
}

fn color(parts: &[&str], i: usize, what: &str) -> Result<Color, String> {
    let name = field(parts, i, what)?;
    Color::from_name(name).ok_or_else(|| format!("unknown color `{name}`"))
}

fn apply_line(terminal: &mut Terminal, line: &str) -> Result<(), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = parts[0];

    match command {
        "resize" => {
            let size = Size::new(num(&parts, 1, "width")?, num(&parts, 2, "height")?);
            terminal.set_buffer_size(size).map_err(|e| e.to_string())
        }
        "window-pos" => {
            let position = Coordinate::new(num(&parts, 1, "left")?, num(&parts, 2, "top")?);
            terminal
                .set_window_position(position)
                .map_err(|e| e.to_string())
        }
        "window-size" => {
            let size = Size::new(num(&parts, 1, "width")?, num(&parts, 2, "height")?);
            terminal.set_window_size(size).map_err(|e| e.to_string())
        }
        "cursor" => {
            let position = Coordinate::new(num(&parts, 1, "left")?, num(&parts, 2, "top")?);
            terminal
                .set_cursor_position(position)
                .map_err(|e| e.to_string())
        }
        "cursor-size" => {
            let percent = num(&parts, 1, "percent")?;
            let percent = u8::try_from(percent).map_err(|_| "percent is too large".to_string())?;
            terminal.set_cursor_size(percent).map_err(|e| e.to_string())
        }
        "cursor-visible" => {
            let visible = match field(&parts, 1, "visibility")? {
                "true" => true,
                "false" => false,
                other => return Err(format!("expected true or false, got `{other}`")),
            };
            terminal.set_cursor_visible(visible);
            Ok(())
        }
        "cell" => {
            let position = Coordinate::new(num(&parts, 1, "left")?, num(&parts, 2, "top")?);
            let text = field(&parts, 3, "character")?;
            let mut chars = text.chars();
            let (c, rest) = (chars.next(), chars.next());
            let c = match (c, rest) {
                (Some(c), None) => c,
                _ => return Err(format!("expected a single character, got `{text}`")),
            };
            let cell = Cell::new(c, terminal.foreground_color(), terminal.background_color());
            terminal.set_cell(position, cell).map_err(|e| e.to_string())
        }
        "move" => {
            let source = Area::new(
                num(&parts, 1, "left")?,
                num(&parts, 2, "top")?,
                num(&parts, 3, "width")?,
                num(&parts, 4, "height")?,
            );
            let target = Coordinate::new(
                num(&parts, 5, "target left")?,
                num(&parts, 6, "target top")?,
            );
            terminal
                .move_area(source, target, None)
                .map_err(|e| e.to_string())
        }
        "color" => {
            terminal.set_foreground_color(color(&parts, 1, "foreground")?);
            terminal.set_background_color(color(&parts, 2, "background")?);
            Ok(())
        }
        "reset-color" => {
            terminal.reset_color();
            Ok(())
        }
        "clear" => {
            terminal.clear();
            Ok(())
        }
        other => Err(format!("unknown command `{other}`")),
    }
}

fn run_script(terminal: &mut Terminal, script: &str) -> Result<(), String> {
    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        apply_line(terminal, line).map_err(|e| format!("line {}: {e}", number + 1))?;
    }
    Ok(())
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args();

    if args.help {
        print_help();
        return Ok(());
    }

    // Read the script
    let script = if let Some(path) = &args.input {
        std::fs::read_to_string(path)?
    } else {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        data
    };

    // Create the terminal and apply the script
    let config = Config {
        width: args.width,
        height: args.height,
        window_width: args.width,
        window_height: args.height,
        ..Config::default()
    };
    let mut terminal =
        Terminal::new(&config).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    run_script(&mut terminal, &script)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    // Output the snapshot
    let snapshot = terminal.snapshot();
    let output_data = if args.text {
        snapshot.to_text()
    } else {
        snapshot
            .to_json()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    };

    if let Some(path) = &args.output {
        let mut file = File::create(path)?;
        file.write_all(output_data.as_bytes())?;
    } else {
        io::stdout().write_all(output_data.as_bytes())?;
    }

    Ok(())
}
