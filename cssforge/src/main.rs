use clap::Parser;
use cssforge_lib::{document, Signature};
use log::info;
use std::fs;

const CSSFORGE_INTRO: &str = r#"
       ___________ ____  ____  ____  ____________
      / ___/ ___/ // __/ / __ \/ __ \/ ___/ ____/
     / /__(__  |__  ) /_/ /_/ / /_/ / (_ / __/
     \___/____/____/_/   \____/_/ |_|\___/____/

    cssforge - build stylesheets from JSON rule trees
"#;

#[derive(Parser)]
#[command(name = "cssforge")]
#[command(about = "Render a JSON stylesheet description to CSS")]
struct Args {
    /// Input JSON document.
    input: String,

    /// Output CSS file. Writes to stdout when omitted.
    output: Option<String>,

    /// Text of the signature comment.
    #[arg(long, conflicts_with = "no_signature")]
    signature: Option<String>,

    /// Leave out the signature comment.
    #[arg(long)]
    no_signature: bool,
}

impl Args {
    fn signature(&self) -> Signature {
        match (&self.signature, self.no_signature) {
            (_, true) => Signature::Omitted,
            (Some(text), false) => Signature::Custom(text.clone()),
            (None, false) => Signature::Default,
        }
    }
}

fn main() {
    env_logger::init();
    eprintln!("{}", CSSFORGE_INTRO);

    // parse the args given in terminal
    let args: Args = Args::parse();

    let source = match fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let sheet = match document::load(&source) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("Error in {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let css = sheet.render_css(args.signature());
    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, css) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            info!("wrote {} rules to {}", sheet.rules().len(), path);
        }
        None => print!("{}", css),
    }
}
