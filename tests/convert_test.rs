//! End-to-end conversion tests.

use nbmd::render::{to_markdown, to_markdown_with_stats, RenderOptions};
use nbmd::{parse_str, Error};

fn options_in(dir: &tempfile::TempDir) -> RenderOptions {
    RenderOptions::default()
        .with_image_dir(dir.path().join("images"))
        .with_image_dir_name("images")
}

#[test]
fn test_title_and_execute_result() {
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["# Title"]},
            {"cell_type": "code", "execution_count": 1, "metadata": {},
             "source": ["1+1"],
             "outputs": [{"output_type": "execute_result", "execution_count": 1,
                          "metadata": {}, "data": {"text/plain": ["2"]}}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let md = to_markdown(&nb, &RenderOptions::default()).unwrap();

    assert!(md.contains("# Title"));
    assert!(md.contains("<p style=\"color: #303f9f;\"><b>In:</b></p>"));
    assert!(md.contains("```python\n1+1\n```"));
    assert!(md.contains("<p style=\"color: #d84315;\"><b>Out:</b></p>"));
    assert!(md.ends_with('2'));

    // The title renders before the code cell.
    assert!(md.find("# Title").unwrap() < md.find("1+1").unwrap());
}

#[test]
fn test_stdout_stream_block() {
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "code", "execution_count": 1, "metadata": {},
             "source": ["print('hello')"],
             "outputs": [{"output_type": "stream", "name": "stdout", "text": ["hello\n"]}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let md = to_markdown(&nb, &RenderOptions::default()).unwrap();
    assert!(md.contains(
        "<pre style=\"background: #eaeef2; padding-top: 5px\">\nhello&#xA;</pre>"
    ));
}

#[test]
fn test_png_preferred_over_plain_text() {
    // "image/png" precedes "text/plain" in the priority list, so the PNG
    // branch (file write plus link) is taken, not the plain-text branch.
    let dir = tempfile::tempdir().unwrap();
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "code", "execution_count": 1, "metadata": {},
             "source": ["plot()"],
             "outputs": [{"output_type": "display_data", "metadata": {},
                          "data": {"text/plain": ["<Figure size 640x480>"],
                                   "image/png": "UE5H\n"}}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let md = to_markdown(&nb, &options_in(&dir)).unwrap();
    assert!(md.contains("![](./images/image1.png)"));
    assert!(!md.contains("<Figure size 640x480>"));
    assert_eq!(
        std::fs::read(dir.path().join("images/image1.png")).unwrap(),
        b"PNG"
    );
}

#[test]
fn test_image_numbering_is_monotonic_across_cells() {
    let dir = tempfile::tempdir().unwrap();
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "code", "metadata": {}, "source": ["a"],
             "outputs": [{"output_type": "display_data", "data": {"image/png": "UE5H"}}]},
            {"cell_type": "markdown", "metadata": {}, "source": ["text between"]},
            {"cell_type": "code", "metadata": {}, "source": ["b"],
             "outputs": [{"output_type": "display_data", "data": {"image/jpeg": "SlBH"}},
                         {"output_type": "display_data", "data": {"image/png": "UE5H"}}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let options = options_in(&dir);
    let md = to_markdown(&nb, &options).unwrap();
    assert!(md.contains("![](./images/image1.png)"));
    assert!(md.contains("![](./images/image2.jpeg)"));
    assert!(md.contains("![](./images/image3.png)"));

    // A fresh conversion restarts numbering from 1 and overwrites.
    let md = to_markdown(&nb, &options).unwrap();
    assert!(md.contains("![](./images/image1.png)"));
    let entries = std::fs::read_dir(dir.path().join("images")).unwrap().count();
    assert_eq!(entries, 3);
}

#[test]
fn test_unknown_mime_is_fatal() {
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "code", "metadata": {}, "source": ["x"],
             "outputs": [{"output_type": "display_data",
                          "data": {"application/vnd.dataframe+json": {"rows": 3}}}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let result = to_markdown(&nb, &RenderOptions::default());
    assert!(matches!(result, Err(Error::UnknownOutput(_))));
}

#[test]
fn test_error_output_ansi_stripped_and_escaped() {
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "code", "metadata": {}, "source": ["1/0"],
             "outputs": [{"output_type": "error", "ename": "ZeroDivisionError",
                          "evalue": "division by zero",
                          "traceback": ["\u001b[31mZeroDivisionError\u001b[0m",
                                        "x < y division by zero"]}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let md = to_markdown(&nb, &RenderOptions::default()).unwrap();
    assert!(md.contains("background: #fddfdd"));
    assert!(md.contains("ZeroDivisionError&#xA;x &lt; y division by zero"));
    assert!(!md.contains('\u{1b}'));
}

#[test]
fn test_html_output_passes_through_folded() {
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "code", "metadata": {}, "source": ["df"],
             "outputs": [{"output_type": "execute_result", "execution_count": 2,
                          "data": {"text/html": ["<table>\n", "<tr><td>1</td></tr>\n", "</table>"],
                                   "text/plain": ["   a\n0  1"]}}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let md = to_markdown(&nb, &RenderOptions::default()).unwrap();
    // HTML wins over text/plain and keeps its tags, newlines folded.
    assert!(md.contains("<table>&#xA;<tr><td>1</td></tr>&#xA;</table>"));
    assert!(!md.contains("   a"));
}

#[test]
fn test_cell_order_preserved() {
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["alpha"]},
            {"cell_type": "raw", "metadata": {}, "source": ["bravo"]},
            {"cell_type": "code", "metadata": {}, "source": ["charlie"], "outputs": []},
            {"cell_type": "markdown", "metadata": {}, "source": ["delta"]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let md = to_markdown(&nb, &RenderOptions::default()).unwrap();
    let positions: Vec<usize> = ["alpha", "bravo", "charlie", "delta"]
        .iter()
        .map(|s| md.find(s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_stats_reflect_rendered_content() {
    let dir = tempfile::tempdir().unwrap();
    let nb = parse_str(
        r##"{
        "cells": [
            {"cell_type": "markdown", "metadata": {}, "source": ["# Report"]},
            {"cell_type": "code", "metadata": {}, "source": ["plot()"],
             "outputs": [{"output_type": "stream", "name": "stdout", "text": ["ok\n"]},
                         {"output_type": "display_data", "data": {"image/png": "UE5H"}}]}
        ],
        "metadata": {}, "nbformat": 4, "nbformat_minor": 5
    }"##,
    )
    .unwrap();

    let result = to_markdown_with_stats(&nb, &options_in(&dir)).unwrap();
    assert_eq!(result.stats.narrative_cells, 1);
    assert_eq!(result.stats.code_cells, 1);
    assert_eq!(result.stats.outputs, 2);
    assert_eq!(result.stats.images, 1);
}
