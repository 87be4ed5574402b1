//! SVG to Component CLI
//!
//! Usage:
//!   svg-to-component [OPTIONS] [FILE]
//!
//! Options:
//!   -n, --name <NAME>            Component name
//!   -f, --framework <FRAMEWORK>  react, vue or svelte
//!   -c, --config <FILE>          Settings file (TOML format)
//!   -o, --out-dir <DIR>          Write the component file instead of printing it
//!   --export <DIR>               Also write <name>.png and <name>.svg
//!   --data-url                   Print the PNG preview as a data URL
//!   -h, --help                   Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use svg_to_component::raster::{export_file_stem, png_data_url, render_png};
use svg_to_component::{
    emit, extract, prepare_source, Framework, IconSize, Settings, SettingsError,
};

#[derive(Parser)]
#[command(name = "svg-to-component")]
#[command(about = "Turn an SVG icon into a React, Vue or Svelte component")]
struct Cli {
    /// Input SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Component name (default: Icon)
    #[arg(short, long)]
    name: Option<String>,

    /// Target framework: react, vue or svelte (default: react)
    #[arg(short, long)]
    framework: Option<String>,

    /// Emit the minimal untyped template
    #[arg(long)]
    no_typescript: bool,

    /// Emit the minimal template without themeable props
    #[arg(long)]
    no_props: bool,

    /// Use the SVG text as given instead of optimizing it first
    #[arg(long)]
    no_optimize: bool,

    /// Icon size variant: sm, md, lg or xl (currently has no effect)
    #[arg(long)]
    size: Option<IconSize>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write the component file into
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Directory to write the PNG export and SVG download into
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print the PNG preview as a data URL instead of the component
    #[arg(long)]
    data_url: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let settings = match load_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            match &cli.config {
                Some(path) => eprintln!("Error loading settings '{}': {}", path.display(), e),
                None => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
    };

    // Read input
    let (raw, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let source = prepare_source(&raw, settings.optimize);
    let options = &settings.options;

    if let Some(dir) = &cli.export {
        if let Err(e) = export_images(&source, &options.name, &settings, dir) {
            eprintln!("Error exporting images: {}", e);
            std::process::exit(1);
        }
    }

    if cli.data_url {
        match png_data_url(&source) {
            Ok(url) => println!("{}", url),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let doc = match extract(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprint!("{}", e.format(source.trim(), &filename));
            std::process::exit(1);
        }
    };
    let code = emit(&doc, options);

    match &cli.out_dir {
        Some(dir) => {
            let path = dir.join(options.framework.filename(&options.name));
            if let Err(e) = fs::create_dir_all(dir).and_then(|_| fs::write(&path, &code)) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", code),
    }
}

/// Settings file (if any) overridden by command-line flags
fn load_settings(cli: &Cli) -> Result<Settings, SettingsError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    let options = &mut settings.options;
    if let Some(name) = &cli.name {
        options.name = name.clone();
    }
    if let Some(framework) = &cli.framework {
        options.framework = framework.parse::<Framework>()?;
    }
    if cli.no_typescript {
        options.include_typescript = false;
    }
    if cli.no_props {
        options.include_props = false;
    }
    if let Some(size) = cli.size {
        options.size = Some(size);
    }
    if cli.no_optimize {
        settings.optimize = false;
    }

    Ok(settings)
}

/// Write `<stem>.png` and `<stem>.svg` for the prepared SVG text
fn export_images(
    source: &str,
    name: &str,
    settings: &Settings,
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let stem = export_file_stem(name);
    fs::create_dir_all(dir)?;

    let png = render_png(source, settings.png_width, settings.png_height)?;
    let png_path = dir.join(format!("{}.png", stem));
    fs::write(&png_path, png)?;

    let svg_path = dir.join(format!("{}.svg", stem));
    fs::write(&svg_path, source)?;

    log::info!("exported {} and {}", png_path.display(), svg_path.display());
    Ok(())
}

fn print_intro() {
    println!(
        r#"SVG to Component - Turn an SVG icon into a React, Vue or Svelte component

USAGE:
    svg-to-component [OPTIONS] [FILE]
    cat icon.svg | svg-to-component --framework vue

OPTIONS:
    -n, --name         Component name (default: Icon)
    -f, --framework    react, vue or svelte (default: react)
    --no-typescript    Emit the minimal untyped template
    --no-props         Emit the minimal template without themeable props
    --no-optimize      Keep the SVG text exactly as given
    -c, --config       Settings file (TOML)
    -o, --out-dir      Write <Name>.tsx / .vue / .svelte into a directory
    --export           Write <name>.png (512x512) and <name>.svg into a directory
    --data-url         Print the PNG preview as a data URL
    -h, --help         Print help

QUICK START:
    svg-to-component logo.svg --name Logo -o src/components

This writes src/components/Logo.tsx with typed, themeable props."#
    );
}
