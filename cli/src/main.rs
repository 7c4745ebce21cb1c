use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::info;
use syllabus::Input;

use crate::config::{Config, GeneratorName};

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let input = syllabus::input::Dir::new(&config.content_dir)?;

    if config.list {
        println!("{}", input.subject_ids().iter().join("\n"));
        return Ok(());
    }

    let mut exe = syllabus::Executor::new(input);
    if let Some(parser_config) = parser_config(&config)? {
        exe = exe.config(parser_config);
    }
    for subject in &config.subject {
        exe = exe.subject(subject);
    }
    for generator_name in config.generator.iter().unique() {
        exe = add_generator(*generator_name, &config, exe)?;
    }
    exe.execute()
}

fn parser_config(config: &Config) -> Result<Option<syllabus::parser::Config>> {
    match &config.config {
        None => Ok(None),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("read config file '{}'", path.display()))?;
            let reader = BufReader::new(file);
            Ok(Some(serde_json::from_reader(reader)?))
        }
    }
}

fn add_generator<I: syllabus::Input>(
    generator_name: GeneratorName,
    config: &Config,
    exe: syllabus::Executor<I>,
) -> Result<syllabus::Executor<I>> {
    let exe = exe.generator(generator_name.create_impl());
    if config.stdout {
        return Ok(exe.output(syllabus::output::StdOut::default()));
    }
    let path = output_path(config, generator_name);
    info!("'{:?}' will write to '{}'", generator_name, path.display());
    Ok(exe.output(syllabus::output::FileSet::new(path)?))
}

fn output_path(config: &Config, generator_name: GeneratorName) -> PathBuf {
    config.output_root.join(
        generator_name
            .to_possible_value()
            .expect("generator names are never skipped")
            .get_name(),
    )
}
