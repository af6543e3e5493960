use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_BUNDLE: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    if let Err(e) = bundle_css() {
        panic!("CSS bundling failed: {}", e);
    }
}

/// Inline every `@import` under `main.css`, minify, write `bundle.css`
fn bundle_css() -> Result<(), String> {
    fs::create_dir_all(CSS_OUT_DIR).map_err(|e| e.to_string())?;

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .map_err(|e| e.to_string())?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| e.to_string())?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| e.to_string())?;

    fs::write(CSS_BUNDLE, css.code).map_err(|e| e.to_string())?;
    Ok(())
}
