use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod tui;

#[derive(Parser)]
#[command(name = "asmgen")]
#[command(about = "Translates arithmetic assignments to assembly mnemonics")]
struct Args {
    /// Path to the source file to translate
    file: Option<PathBuf>,

    /// Write the generated assembly to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Launch the interactive terminal UI
    #[arg(long)]
    tui: bool,
}

fn main() {
    let args = Args::parse();

    if args.tui {
        let initial_text = match &args.file {
            Some(path) => fs::read_to_string(path).unwrap_or_default(),
            None => DEFAULT_SAMPLE.trim().to_string(),
        };
        let _ = tui::run_tui(args.file, initial_text);
        return;
    }

    let src = if let Some(file_path) = &args.file {
        fs::read_to_string(file_path).unwrap_or_else(|e| {
            eprintln!("Error reading file '{}': {}", file_path.display(), e);
            std::process::exit(1);
        })
    } else {
        DEFAULT_SAMPLE.trim().to_string()
    };

    let asm = asmgen::translate(&src).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &asm) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", asm),
    }
}

const DEFAULT_SAMPLE: &str = r#"
total = a + b
diff = total - c
area = w * h
ratio = area / d
"#;
