//! Integration tests for msgpatch
//!
//! End-to-end tests that read definition files and write patches to disk.
//!
mod common;
use common::*;
use msgpatch::prelude::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_file_writes_patch() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("msg.def");
        let output = dir.path().join("out.pd");
        fs::write(&input, MINIMAL_MESSAGE).unwrap();

        let written = Compiler::default()
            .compile_file(&input, Some(&output))
            .expect("Failed to compile file");
        assert_eq!(written, output);

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "#N canvas 10 10 500 500 16;\n\
             #X obj 10 10 inlet;\n\
             #X obj 100 10 inlet;\n\
             #X obj 10 400 outlet;\n\
             #X obj 100 50 route a b;\n\
             #X obj 100 400 print msg: unknown slot;\n\
             #X obj 100 100 lexicon;\n\
             #X obj 10 100 t b;\n\
             #X obj 10 130 list;\n\
             #X connect 1 0 3 0;\n\
             #X connect 3 2 4 0;\n\
             #X connect 3 0 5 0;\n\
             #X connect 0 0 6 0;\n\
             #X connect 6 0 7 0;\n\
             #X connect 5 0 7 1;\n\
             #X connect 7 0 2 0;\n"
        );
    }

    #[test]
    fn test_default_output_path_uses_message_name() {
        let spec = Compiler::default().parse(GREETING_MESSAGE).unwrap();
        assert_eq!(
            default_output_path(&spec, "pd"),
            std::path::PathBuf::from("greeting.pd")
        );
    }

    #[test]
    fn test_canvas_config_reaches_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("greeting.def");
        let output = dir.path().join("greeting.pd");
        fs::write(&input, GREETING_MESSAGE).unwrap();

        let compiler = Compiler::builder()
            .with_canvas(CanvasConfig {
                font_size: 10,
                size: (800, 600),
                ..CanvasConfig::default()
            })
            .build();
        compiler.compile_file(&input, Some(&output)).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("#N canvas 10 10 800 600 10;\n"));
        assert!(text.contains("#X msg 300 122 hello;\n"));
        assert!(text.contains("#X msg 300 152 comma;\n"));
        assert!(text.contains("#X obj 10 100 t b b b;\n"));
    }

    #[test]
    fn test_failed_build_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.def");
        let output = dir.path().join("broken.pd");
        fs::write(
            &input,
            "NAME broken SLOTS a EQUATIONS x = lexicon(y) y = lexicon(a) OUTPUT y",
        )
        .unwrap();

        let err = Compiler::default()
            .compile_file(&input, Some(&output))
            .unwrap_err();
        assert!(matches!(err, CompileError::Build(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_syntax_error_is_located_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.def");
        fs::write(&input, "NAME bad\nSLOTS a\nEQUATIONS\n  y = lexicon a)\nOUTPUT y\n").unwrap();

        match Compiler::default().compile_file(&input, None) {
            Err(CompileError::Syntax(e)) => {
                assert_eq!((e.line, e.column), (4, 15));
                assert_eq!(e.found, "'a'");
                let message = e.to_string();
                assert!(message.contains("line 4"), "{}", message);
            }
            other => panic!("Expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Compiler::default()
            .compile_file(&dir.path().join("missing.def"), None)
            .unwrap_err();
        assert!(matches!(err, CompileError::Io { action: "read", .. }));
        assert!(err.to_string().contains("missing.def"));
    }
}
