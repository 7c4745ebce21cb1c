use std::cell::RefCell;
use std::ops::DerefMut;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use log::{debug, info};

use crate::generator::Generator;
use crate::input::Input;
use crate::output::Output;
use crate::parser;
use crate::registry::Registry;

type OutputPtr = Rc<RefCell<dyn Output>>;

/// Builds the selected courses from an [Input] and runs every [Generator] on each of them.
pub struct Executor<I: Input> {
    input: I,
    config: Option<parser::Config>,
    subjects: Vec<String>,
    generator_infos: Vec<GeneratorInfo>,
}

pub struct GeneratorInfo {
    generator: Box<dyn Generator>,
    outputs: Vec<OutputPtr>,
}

impl<I: Input> Executor<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            config: None,
            subjects: vec![],
            generator_infos: vec![],
        }
    }

    pub fn config(mut self, config: parser::Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Restrict execution to `subject_id`. If no subjects are added, every subject of the
    /// [Input] is built.
    pub fn subject(mut self, subject_id: impl ToString) -> Self {
        self.subjects.push(subject_id.to_string());
        self
    }

    pub fn generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generator_infos.push(GeneratorInfo {
            generator: Box::new(generator),
            outputs: vec![],
        });
        self
    }

    /// Add an output for the last-added [Generator].
    ///
    /// This method takes complete ownership of the output. If you want access to the output after
    /// execution, use [Executor::output_ptr].
    pub fn output(self, output: impl Output + 'static) -> Self {
        self.output_ptr(Rc::new(RefCell::new(output)))
    }

    /// Add an output for the last-added [Generator].
    ///
    /// Outputs are `Rc<RefCell<dyn Output>>` which allows you to keep access to the output
    /// for usage after [Executor::execute] is called.
    ///
    /// The output is only borrowed mutably during [Executor::execute].
    ///
    /// Outputs added before any generator are ignored, and [Executor::execute] will fail.
    pub fn output_ptr(mut self, output: OutputPtr) -> Self {
        if let Some(info) = self.generator_infos.last_mut() {
            info.outputs.push(output);
        }
        self
    }

    /// Number of outputs attached to the last-added [Generator].
    pub fn output_count(&self) -> usize {
        self.generator_infos
            .last()
            .map(|info| info.outputs.len())
            .unwrap_or(0)
    }

    pub fn execute(mut self) -> Result<()> {
        if self.generator_infos.is_empty() {
            return Err(anyhow!("no 'generators' have been specified"));
        }
        for info in &self.generator_infos {
            if info.outputs.is_empty() {
                return Err(anyhow!(
                    "each 'generator' must have at least one 'output' specified"
                ));
            }
        }

        let config = self.config.take().unwrap_or_default();
        debug!("Config: {:#?}", config);
        let registry = Registry::with_config(&self.input, config);

        let subjects = if self.subjects.is_empty() {
            registry.course_ids().into_iter().collect_vec()
        } else {
            self.subjects.iter().unique().cloned().collect_vec()
        };
        if subjects.is_empty() {
            return Err(anyhow!("no subjects found in the input"));
        }

        for subject_id in &subjects {
            let course = match registry.load_course(subject_id) {
                Ok(course) => course,
                Err(err) => {
                    parser::report_error(subject_id, &self.input, &err);
                    return Err(err).with_context(|| format!("failed to build '{}'", subject_id));
                }
            };

            for info in &mut self.generator_infos {
                for output in &info.outputs {
                    info!(
                        "Generating '{}' with generator '{:?}' to output '{:?}'...",
                        subject_id,
                        info.generator,
                        output.borrow()
                    );
                    info.generator
                        .generate(&course, output.borrow_mut().deref_mut())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    mod execute {
        use std::cell::RefCell;
        use std::rc::Rc;

        use anyhow::Result;

        use crate::generator::{Dbg, Markdown};
        use crate::output;
        use crate::test_util::{algebra_input, physics_input, ALGEBRA_ID, PHYSICS_ID};
        use crate::{input, Executor, Input};

        fn both_subjects() -> input::Buffer {
            let physics = physics_input();
            let mut input = algebra_input();
            for kind in input::ContentKind::ALL {
                let data = physics.data(PHYSICS_ID, kind).expect("fixture data");
                input.insert(PHYSICS_ID, kind, data);
            }
            input
        }

        #[test]
        fn happy_path() -> Result<()> {
            let output = Rc::new(RefCell::new(output::Buffer::default()));
            Executor::new(algebra_input())
                .generator(Markdown::default())
                .output_ptr(output.clone())
                .execute()?;
            assert!(output.borrow().to_string().starts_with("# Algebra\n"));
            Ok(())
        }

        #[test]
        fn builds_every_subject_by_default() -> Result<()> {
            let output = Rc::new(RefCell::new(output::ChunkBuffer::default()));
            Executor::new(both_subjects())
                .generator(Markdown::default())
                .output_ptr(output.clone())
                .execute()?;
            assert_eq!(
                output.borrow().keys().map(str::to_string).collect::<Vec<_>>(),
                vec!["9702.md".to_string(), "algebra.md".to_string()]
            );
            Ok(())
        }

        #[test]
        fn builds_selected_subjects() -> Result<()> {
            let output = Rc::new(RefCell::new(output::ChunkBuffer::default()));
            Executor::new(both_subjects())
                .subject(ALGEBRA_ID)
                .generator(Markdown::default())
                .output_ptr(output.clone())
                .execute()?;
            assert_eq!(output.borrow().keys().count(), 1);
            assert!(output.borrow().data("algebra.md").is_some());
            Ok(())
        }

        #[test]
        fn calls_all_generators_with_correct_outputs() -> Result<()> {
            let output0 = Rc::new(RefCell::new(output::ChunkBuffer::default()));
            let output1 = Rc::new(RefCell::new(output::ChunkBuffer::default()));
            let output2 = Rc::new(RefCell::new(output::ChunkBuffer::default()));
            Executor::new(algebra_input())
                .generator(Markdown::default())
                .output_ptr(output0.clone())
                .generator(Dbg::default())
                .output_ptr(output1.clone())
                .output_ptr(output2.clone())
                .execute()?;
            assert!(output0.borrow().data("algebra.md").is_some());
            assert!(output1.borrow().data("algebra.txt").is_some());
            assert!(output2.borrow().data("algebra.txt").is_some());
            assert!(output1.borrow().data("algebra.md").is_none());
            Ok(())
        }

        #[test]
        fn failed_subject_aborts() {
            let input = algebra_input().with_content(ALGEBRA_ID, "not json");
            let output = Rc::new(RefCell::new(output::Buffer::default()));
            let result = Executor::new(input)
                .generator(Markdown::default())
                .output_ptr(output.clone())
                .execute();
            assert!(result.is_err());
            assert!(output.borrow().to_string().is_empty());
        }

        #[test]
        fn repeated_subject_is_built_once() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let output = Rc::new(RefCell::new(output::FileSet::new(dir.path())?));
            Executor::new(algebra_input())
                .subject(ALGEBRA_ID)
                .subject(ALGEBRA_ID)
                .generator(Markdown::default())
                .output_ptr(output.clone())
                .execute()?;
            assert_eq!(output.borrow().written().count(), 1);
            Ok(())
        }

        #[test]
        fn empty_metadata_fails_without_panicking() {
            let input = input::Buffer::new()
                .with_metadata("empty", "")
                .with_content("empty", "[]");
            let result = Executor::new(input)
                .generator(Markdown::default())
                .output(output::Buffer::default())
                .execute();
            assert!(result.is_err());
        }

        #[test]
        fn unknown_subject_errors() {
            let result = Executor::new(algebra_input())
                .subject("0580")
                .generator(Markdown::default())
                .output(output::Buffer::default())
                .execute();
            assert!(result.is_err());
        }
    }

    mod validation {
        use crate::executor::Executor;
        use crate::generator::Markdown;
        use crate::test_util::algebra_input;
        use crate::{input, output};

        #[test]
        fn missing_generator() {
            let result = Executor::new(algebra_input())
                // no generator
                .execute();
            assert!(result.is_err())
        }

        #[test]
        fn missing_output() {
            let result = Executor::new(algebra_input())
                .generator(Markdown::default())
                // no output
                .execute();
            assert!(result.is_err())
        }

        #[test]
        fn output_before_generator() {
            let exe = Executor::new(algebra_input()).output(output::Buffer::default());
            assert_eq!(exe.output_count(), 0);
            assert!(exe.execute().is_err());
        }

        #[test]
        fn empty_input() {
            let result = Executor::new(input::Buffer::new())
                .generator(Markdown::default())
                .output(output::Buffer::default())
                .execute();
            assert!(result.is_err())
        }
    }
}
