#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::{GenError, Processor};
use cg_ir::{Block, Expr, MethodDecl, Modifiers, QualifiedName, Stmt, TypeRef};
use pretty_assertions::assert_eq;

type Log = Rc<RefCell<Vec<String>>>;

/// Records every call it receives into a shared log.
struct Recorder {
    name: &'static str,
    prefix: &'static str,
    log: Log,
    fail_on: Option<&'static str>,
    check_fails_on: Option<&'static str>,
}

impl Recorder {
    fn new(name: &'static str, prefix: &'static str, log: &Log) -> Self {
        Recorder {
            name,
            prefix,
            log: Rc::clone(log),
            fail_on: None,
            check_fails_on: None,
        }
    }
}

impl Processor for Recorder {
    fn name(&self) -> &str {
        self.name
    }

    fn is_applicable(&self, decl: &TypeDecl) -> GenResult<bool> {
        if self.check_fails_on == Some(decl.name().as_str()) {
            return Err(GenError::fault(self.name, "unreadable declaration"));
        }
        Ok(decl.name().starts_with(self.prefix))
    }

    fn process(&mut self, decl: &TypeDecl, _output: &mut OutputRegistry) -> GenResult<()> {
        self.log
            .borrow_mut()
            .push(format!("{}:process:{}", self.name, decl.name()));
        if self.fail_on == Some(decl.name().as_str()) {
            return Err(GenError::fault(self.name, "malformed input"));
        }
        Ok(())
    }

    fn on_complete(&mut self, output: &OutputRegistry) -> GenResult<()> {
        self.log
            .borrow_mut()
            .push(format!("{}:complete:{}", self.name, output.len()));
        Ok(())
    }
}

/// Generates `<name>Copy` for every declaration.
struct Copier;

impl Processor for Copier {
    fn name(&self) -> &str {
        "copier"
    }

    fn is_applicable(&self, _decl: &TypeDecl) -> GenResult<bool> {
        Ok(true)
    }

    fn process(&mut self, decl: &TypeDecl, output: &mut OutputRegistry) -> GenResult<()> {
        output.create_class(decl.name().with_suffix("Copy"), Modifiers::PUBLIC)?;
        Ok(())
    }
}

/// Generates a value-returning method with no return statement.
struct Broken;

impl Processor for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn is_applicable(&self, _decl: &TypeDecl) -> GenResult<bool> {
        Ok(true)
    }

    fn process(&mut self, decl: &TypeDecl, output: &mut OutputRegistry) -> GenResult<()> {
        let class = output.create_class(decl.name().with_suffix("Broken"), Modifiers::PUBLIC)?;
        class.add_method(
            MethodDecl::new(
                Modifiers::PUBLIC,
                TypeRef::named("java.lang.String"),
                "describe",
                vec![],
                vec![],
            )
            .with_body(Block::of(Stmt::Expr(Expr::This))),
        );
        Ok(())
    }
}

fn units(names: &[&str]) -> Vec<TypeDecl> {
    names
        .iter()
        .map(|name| TypeDecl::class(*name, Modifiers::PUBLIC))
        .collect()
}

#[test]
fn test_dispatch_order_is_input_then_registration() {
    let log = Log::default();
    let mut processors = ProcessorRegistry::new()
        .with(Recorder::new("first", "a.", &log))
        .unwrap()
        .with(Recorder::new("second", "", &log))
        .unwrap();

    run(&units(&["a.One", "b.Two", "a.Three"]), &mut processors).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "first:process:a.One",
            "second:process:a.One",
            "second:process:b.Two",
            "first:process:a.Three",
            "second:process:a.Three",
            "first:complete:0",
            "second:complete:0",
        ]
    );
}

#[test]
fn test_completion_runs_once_even_without_matches() {
    let log = Log::default();
    let mut processors = ProcessorRegistry::new()
        .with(Recorder::new("never", "zzz.", &log))
        .unwrap();

    run(&units(&["a.One", "b.Two"]), &mut processors).unwrap();

    assert_eq!(*log.borrow(), vec!["never:complete:0"]);
}

#[test]
fn test_completion_runs_once_for_empty_input() {
    let log = Log::default();
    let mut processors = ProcessorRegistry::new()
        .with(Recorder::new("p", "", &log))
        .unwrap();

    let output = run(&[], &mut processors).unwrap();

    assert!(output.is_empty());
    assert_eq!(*log.borrow(), vec!["p:complete:0"]);
}

#[test]
fn test_completion_observes_full_registry() {
    let log = Log::default();
    let mut processors = ProcessorRegistry::new()
        .with(Copier)
        .unwrap()
        .with(Recorder::new("after", "nothing.", &log))
        .unwrap();

    let output = run(&units(&["a.One", "a.Two"]), &mut processors).unwrap();

    assert_eq!(output.len(), 2);
    assert_eq!(*log.borrow(), vec!["after:complete:2"]);
}

#[test]
fn test_processor_fault_aborts_run() {
    let log = Log::default();
    let mut failing = Recorder::new("failing", "", &log);
    failing.fail_on = Some("a.Two");
    let mut processors = ProcessorRegistry::new()
        .with(failing)
        .unwrap()
        .with(Recorder::new("later", "", &log))
        .unwrap();

    let err = run(&units(&["a.One", "a.Two", "a.Three"]), &mut processors).unwrap_err();

    assert_eq!(err, GenError::fault("failing", "malformed input"));
    // Nothing after the fault runs, including completion hooks.
    assert_eq!(
        *log.borrow(),
        vec![
            "failing:process:a.One",
            "later:process:a.One",
            "failing:process:a.Two",
        ]
    );
}

#[test]
fn test_applicability_fault_aborts_run() {
    let log = Log::default();
    let mut checking = Recorder::new("checking", "", &log);
    checking.check_fails_on = Some("a.Two");
    let mut processors = ProcessorRegistry::new()
        .with(Recorder::new("earlier", "", &log))
        .unwrap()
        .with(checking)
        .unwrap();

    let err = run(&units(&["a.One", "a.Two", "a.Three"]), &mut processors).unwrap_err();

    assert_eq!(err, GenError::fault("checking", "unreadable declaration"));
    // The faulting declaration is not skipped: the run stops there.
    assert_eq!(
        *log.borrow(),
        vec![
            "earlier:process:a.One",
            "checking:process:a.One",
            "earlier:process:a.Two",
        ]
    );
}

#[test]
fn test_duplicate_output_across_processors_fails() {
    struct OtherCopier;

    impl Processor for OtherCopier {
        fn name(&self) -> &str {
            "other-copier"
        }

        fn is_applicable(&self, _decl: &TypeDecl) -> GenResult<bool> {
            Ok(true)
        }

        fn process(&mut self, decl: &TypeDecl, output: &mut OutputRegistry) -> GenResult<()> {
            Copier.process(decl, output)
        }
    }

    let mut processors = ProcessorRegistry::new()
        .with(Copier)
        .unwrap()
        .with(OtherCopier)
        .unwrap();

    let err = run(&units(&["a.One"]), &mut processors).unwrap_err();
    assert_eq!(
        err,
        GenError::DuplicateOutputName {
            name: QualifiedName::new("a.OneCopy"),
        }
    );
}

#[test]
fn test_invalid_generated_method_fails_validation() {
    let mut processors = ProcessorRegistry::new().with(Broken).unwrap();

    let err = run(&units(&["a.One"]), &mut processors).unwrap_err();
    assert!(matches!(
        err,
        GenError::InvalidOutput { ref class, ref method, .. }
            if class.as_str() == "a.OneBroken" && method == "describe"
    ));
}

#[test]
fn test_stats() {
    let log = Log::default();
    let mut processors = ProcessorRegistry::new()
        .with(Copier)
        .unwrap()
        .with(Recorder::new("a-only", "a.", &log))
        .unwrap();

    let (output, stats) =
        run_with_stats(&units(&["a.One", "b.Two", "a.Three"]), &mut processors).unwrap();

    assert_eq!(
        stats,
        RunStats {
            visited: 3,
            matched: 5,
            generated: 3,
        }
    );
    assert_eq!(output.len(), stats.generated);
}
