// Integration testing drives the compiled binary against real scratch
// directories, the same way a caller would.
use std::fs;
use std::path::Path;

struct Site {
    _root: tempfile::TempDir,
    input: std::path::PathBuf,
    output: std::path::PathBuf,
    examples: std::path::PathBuf,
}

fn scaffold(template: &str, example_files: &[(&str, &str)]) -> Site {
    let root = tempfile::tempdir().unwrap();

    let input = root.path().join("input");
    let output = root.path().join("output");
    let examples = root.path().join("examples-src");

    fs::create_dir(&input).unwrap();
    fs::create_dir(&output).unwrap();
    fs::create_dir(&examples).unwrap();

    fs::write(input.join("index.html"), template).unwrap();

    for (name, content) in example_files {
        fs::write(examples.join(name), content).unwrap();
    }

    Site {
        _root: root,
        input,
        output,
        examples,
    }
}

fn run(site: &Site) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("webwerf").unwrap();

    cmd.arg(&site.input).arg(&site.output).arg(&site.examples);

    cmd
}

fn assert_same_bytes(a: &Path, b: &Path) {
    assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
}

#[test]
fn end_to_end_builds_index_and_copies_examples() {
    let site = scaffold(
        "<html><body><ul>{{examples}}</ul></body></html>",
        &[("hello.js", "console.log('hi');"), ("readme.md", "# docs")],
    );

    run(&site)
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "copying 2 files to examples directory",
        ))
        .stdout(predicates::str::contains("found 1 examples"))
        .stdout(predicates::str::contains("website build done."));

    let index = fs::read_to_string(site.output.join("index.html")).unwrap();
    assert_eq!(
        index,
        "<html><body><ul><li><a href=\"#example:hello\">hello</a></li></ul></body></html>"
    );

    assert_same_bytes(
        &site.examples.join("hello.js"),
        &site.output.join("examples/hello.js"),
    );
    assert_same_bytes(
        &site.examples.join("readme.md"),
        &site.output.join("examples/readme.md"),
    );
}

#[test]
fn near_miss_filenames_are_copied_but_unlisted() {
    let site = scaffold(
        "<ul>{{examples}}</ul>",
        &[("foo.jsx", "x"), ("foo.js.bak", "y")],
    );

    run(&site)
        .assert()
        .success()
        .stdout(predicates::str::contains("found 0 examples"));

    let index = fs::read_to_string(site.output.join("index.html")).unwrap();
    assert_eq!(index, "<ul></ul>");

    assert!(site.output.join("examples/foo.jsx").is_file());
    assert!(site.output.join("examples/foo.js.bak").is_file());
}

#[test]
fn second_run_against_same_output_fails() {
    let site = scaffold("<ul>{{examples}}</ul>", &[("hello.js", "x")]);

    run(&site).assert().success();

    run(&site)
        .assert()
        .failure()
        .stderr(predicates::str::contains("creating a directory"));
}

#[test]
fn missing_placeholder_passes_template_through() {
    let template = "<html><body>nothing to fill</body></html>";
    let site = scaffold(template, &[("hello.js", "x")]);

    run(&site)
        .assert()
        .success()
        .stdout(predicates::str::contains("website build done."));

    let index = fs::read_to_string(site.output.join("index.html")).unwrap();
    assert_eq!(index, template);
}

#[test]
fn invalid_directory_argument_names_the_position() {
    let site = scaffold("<ul>{{examples}}</ul>", &[]);

    let mut cmd = assert_cmd::Command::cargo_bin("webwerf").unwrap();
    cmd.arg(&site.input)
        .arg(site.output.join("does-not-exist"))
        .arg(&site.examples);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("invalid directory argument 2"));

    // fail-fast: nothing was written
    assert!(!site.output.join("examples").exists());
    assert!(!site.output.join("index.html").exists());
}

#[test]
fn missing_template_fails_the_run() {
    let site = scaffold("<ul>{{examples}}</ul>", &[("hello.js", "x")]);

    fs::remove_file(site.input.join("index.html")).unwrap();

    run(&site)
        .assert()
        .failure()
        .stderr(predicates::str::contains("reading a file"));
}
