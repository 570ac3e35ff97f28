use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;
use symbol::error;
use symbol::lang::{Error, Token};
use symbol::mach::Program;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const COMMANDS: &[&str] = &[
    "ABOUT", "ASCII", "COMPILE", "EXIT", "EXTRACT", "GUIDE", "LIST", "LOAD", "NEW", "QUIT", "RUN",
    "SAVE",
];

const GUIDE: &str = "\
+ increment the current cell        - decrement the current cell
* double the current cell           / halve the current cell
& AND with the neighbor cell        | OR with the neighbor cell
^ XOR with the neighbor cell        ~ complement the current cell
> next cell of the current tape     < previous cell of the current tape
( first cell of the current tape    ) last cell of the current tape
} next tape of the bank             { previous tape of the bank
[ first tape of the bank            ] last tape of the bank
@ print the current cell            _ add a tape to the bank
! reset the current tape            . end of program

The neighbor cell is the one to the right, or to the left on the last cell.
Any other character is ignored.";

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let mut args = std::env::args().skip(1);
    if let Some(filename) = args.next() {
        if let Err(error) = run_file(&filename, &mut std::io::stdout()) {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            std::process::exit(1);
        }
        return;
    }
    if let Err(error) = main_loop() {
        eprintln!("{}", error);
    }
}

fn run_file<W: Write>(filename: &str, stdout: &mut W) -> Result<(), Error> {
    let mut program = Program::new();
    program.write(&load(filename)?.join("\n"));
    program.compile()?;
    let mut out = String::new();
    let result = program.run(&mut out);
    if let Err(error) = stdout
        .write_all(out.as_bytes())
        .and_then(|_| stdout.flush())
    {
        return Err(error!(DiskIoError; error.to_string().as_str()));
    }
    result
}

#[derive(Debug, PartialEq)]
enum Command {
    About,
    Ascii,
    Compile,
    Exit,
    Extract,
    Guide,
    List,
    Load(String),
    New,
    Run,
    Save(String),
}

impl Command {
    /// A line is a command only when it is exactly a command word, or
    /// `LOAD`/`SAVE` followed by a quoted file name. Anything else is source.
    fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (word, rest) = match line.find(char::is_whitespace) {
            Some(idx) => (&line[..idx], line[idx..].trim()),
            None => (line, ""),
        };
        let word = word.to_ascii_uppercase();
        if word == "LOAD" || word == "SAVE" {
            if rest.len() < 2 || !rest.starts_with('"') || !rest.ends_with('"') {
                return None;
            }
            let filename = &rest[1..rest.len() - 1];
            if filename.contains('"') {
                return None;
            }
            let filename = filename.to_string();
            return Some(if word == "LOAD" {
                Command::Load(filename)
            } else {
                Command::Save(filename)
            });
        }
        if !rest.is_empty() {
            return None;
        }
        Some(match word.as_str() {
            "ABOUT" => Command::About,
            "ASCII" => Command::Ascii,
            "COMPILE" => Command::Compile,
            "EXIT" | "QUIT" => Command::Exit,
            "EXTRACT" => Command::Extract,
            "GUIDE" => Command::Guide,
            "LIST" => Command::List,
            "NEW" => Command::New,
            "RUN" => Command::Run,
            _ => return None,
        })
    }
}

struct Editor {
    lines: Vec<String>,
    dirty: bool,
    program: Program,
}

impl Editor {
    fn new() -> Editor {
        Editor {
            lines: Vec::new(),
            dirty: false,
            program: Program::new(),
        }
    }

    fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn main_loop() -> std::io::Result<()> {
    let interface = Interface::new("SYMBOL")?;
    interface.set_completer(Arc::new(CommandCompleter));
    let mut editor = Editor::new();
    interface.write_fmt(format_args!("SYMBOL\nREADY.\n"))?;

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let command = match Command::parse(&string) {
            Some(command) => command,
            None => {
                editor.lines.push(string);
                editor.dirty = true;
                continue;
            }
        };
        interface.add_history_unique(string);
        debug!(?command, "command");
        match command {
            Command::Exit => {
                if !editor.dirty || confirm(&interface, "UNSAVED CHANGES. EXIT (Y/N)? ")? {
                    break;
                }
            }
            command => {
                if let Err(error) = execute(&interface, &mut editor, command) {
                    warn!(%error, "command failed");
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
        }
        interface.write_fmt(format_args!("READY.\n"))?;
    }
    Ok(())
}

fn confirm<T: Terminal>(interface: &Interface<T>, prompt: &str) -> std::io::Result<bool> {
    interface.set_prompt(prompt)?;
    let answer = interface.read_line();
    interface.set_prompt("")?;
    Ok(match answer? {
        ReadResult::Input(s) => s.trim().eq_ignore_ascii_case("Y"),
        ReadResult::Signal(_) | ReadResult::Eof => true,
    })
}

fn execute<T: Terminal>(
    interface: &Interface<T>,
    editor: &mut Editor,
    command: Command,
) -> Result<(), Error> {
    let write = |s: String| {
        interface
            .write_fmt(format_args!("{}", s))
            .map_err(|e| error!(DiskIoError; &e.to_string()))
    };
    match command {
        Command::New => {
            editor.lines.clear();
            editor.dirty = false;
            editor.program.clear();
        }
        Command::List => {
            for (index, line) in decorate_list(&editor.lines).iter().enumerate() {
                write(format!("{:>4} {}\n", index + 1, line))?;
            }
        }
        Command::Load(filename) => {
            editor.lines = load(&filename)?;
            editor.dirty = false;
        }
        Command::Save(filename) => {
            let filename = save(&editor.lines, &filename)?;
            editor.dirty = false;
            write(format!("SAVED {}\n", filename))?;
        }
        Command::Compile => {
            editor.program.write(&editor.text());
            editor.program.compile()?;
            write("COMPILED\n".to_string())?;
        }
        Command::Run => {
            let mut out = String::new();
            let result = editor.program.run(&mut out);
            editor.program.clear();
            if !out.is_empty() {
                write(format!("{}\n", out))?;
            }
            result?;
        }
        Command::Extract => {
            let symbols = editor.program.extract_symbols()?;
            write(format!("{}\n", symbols))?;
        }
        Command::Guide => write(format!("{}\n", GUIDE))?,
        Command::Ascii => write(ascii_table())?,
        Command::About => write(format!(
            "SYMBOL {}\nAn esoteric language of tapes and seven-bit cells.\n",
            env!("CARGO_PKG_VERSION")
        ))?,
        Command::Exit => {}
    }
    Ok(())
}

struct CommandCompleter;

impl<Term: Terminal> Completer<Term> for CommandCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if start != 0 || word.is_empty() {
            return None;
        }
        let word = word.to_ascii_uppercase();
        let comp_list: Vec<Completion> = COMMANDS
            .iter()
            .filter(|c| c.starts_with(&word))
            .map(|c| Completion::simple(c.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}

/// Symbols in bold, filler dimmed, and everything after the terminator
/// dimmed as well since it never reaches the instruction stream.
fn decorate_list(lines: &[String]) -> Vec<String> {
    let bold = Style::new().bold();
    let dim = Style::new().dimmed();
    let mut terminated = false;
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let mut s = String::new();
        for ch in line.chars() {
            let token = Token::new(ch);
            if !terminated && token.is_valid() {
                s.push_str(&bold.paint(ch.to_string()).to_string());
                terminated = token.is_terminator();
            } else {
                s.push_str(&dim.paint(ch.to_string()).to_string());
            }
        }
        out.push(s);
    }
    out
}

fn ascii_table() -> String {
    let mut s = String::new();
    for row in 0..24 {
        for col in 0..4 {
            let code = 32 + row + col * 24;
            if code > 126 {
                continue;
            }
            s.push_str(&format!("{:>5} {:<6}", code, char::from(code as u8)));
        }
        s.push('\n');
    }
    s
}

fn load(filename: &str) -> Result<Vec<String>, Error> {
    if filename.is_empty() {
        return Err(error!(BadFileName));
    }
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(DiskIoError; msg.as_str())),
            }
        }
    };
    let mut lines = Vec::new();
    for line in reader.lines() {
        match line {
            Err(error) => return Err(error!(DiskIoError; error.to_string().as_str())),
            Ok(line) => lines.push(line),
        }
    }
    Ok(lines)
}

fn save(lines: &[String], filename: &str) -> Result<String, Error> {
    if lines.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    if filename.is_empty() {
        return Err(error!(BadFileName));
    }
    let mut filename = filename.to_string();
    let has_extension = Path::new(&filename)
        .extension()
        .map_or(false, |ext| !ext.is_empty());
    if !has_extension {
        if !filename.ends_with('.') {
            filename.push('.');
        }
        filename.push_str("sym");
    }
    let mut file = match File::create(&filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(DiskIoError; error.to_string().as_str())),
    };
    for line in lines {
        if let Err(error) = writeln!(file, "{}", line) {
            return Err(error!(DiskIoError; error.to_string().as_str()));
        }
    }
    Ok(filename)
}
