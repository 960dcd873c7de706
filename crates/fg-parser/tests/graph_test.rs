//! End-to-end tests for fg-parser.
//!
//! Covers whole-graph parsing, the error taxonomy, custom definition sinks,
//! render round trips and independent parses on separate threads.

use fg_parser::{
    parse, parse_with, render_graph, render_tokens, tokenize, Argument, Error, FilterDefinition,
    FilterGraphParser, FilterNode, LabelPhase,
};

/// Real-world expressions used across several tests.
const SAMPLES: &[&str] = &[
    "scale=1280:720",
    "[0:v]scale=1280:720,eq=brightness=0.1[v1];[0:a]volume=2.0[a1]",
    "[0:v]split[main][tmp];[tmp]crop=iw:ih/2:0:0,vflip[flip];[main][flip]overlay=0:H/2[out]",
    r"drawtext=fontfile=/fonts/a.ttf:text='Frame\: %{n}':x=10:y=h-th-10",
    "[0:a][1:a]amix=inputs=2:duration=longest[aout]",
    "[in]null[out]",
    "anullsrc=r=48000:cl=stereo,atrim=duration=5",
    "[a]=[b]",
    "[x][y]",
    "a;,,",
    r"a'b\",
];

// ---------------------------------------------------------------------------
// Whole-graph parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_documented_scenario() {
    let graph = parse("[0:v]scale=1280:720,eq=brightness=0.1[v1];[0:a]volume=2.0[a1]").unwrap();

    assert_eq!(graph.len(), 2);
    assert_eq!(graph[0].len(), 2);

    assert_eq!(graph[0][0].source_labels, vec!["0:v"]);
    assert_eq!(graph[0][0].name, "scale");
    assert_eq!(
        graph[0][0].arguments,
        vec![Argument::key_only("1280"), Argument::key_only("720")]
    );

    assert!(graph[0][1].source_labels.is_empty());
    assert_eq!(graph[0][1].name, "eq");
    assert_eq!(graph[0][1].arguments, vec![Argument::new("brightness", "0.1")]);
    assert_eq!(graph[0][1].destination_labels, vec!["v1"]);

    assert_eq!(graph[1].len(), 1);
    assert_eq!(graph[1][0].source_labels, vec!["0:a"]);
    assert_eq!(graph[1][0].name, "volume");
    assert_eq!(graph[1][0].arguments, vec![Argument::key_only("2.0")]);
    assert_eq!(graph[1][0].destination_labels, vec!["a1"]);
}

#[test]
fn parses_split_overlay_graph() {
    let graph = parse(SAMPLES[2]).unwrap();
    assert_eq!(graph.len(), 3);

    let split = &graph[0][0];
    assert_eq!(split.name, "split");
    assert_eq!(split.destination_labels, vec!["main", "tmp"]);

    let crop = &graph[1][0];
    assert_eq!(crop.source_labels, vec!["tmp"]);
    assert_eq!(crop.arguments.len(), 4);

    let overlay = &graph[2][0];
    assert_eq!(overlay.source_labels, vec!["main", "flip"]);
    assert_eq!(
        overlay.arguments,
        vec![Argument::key_only("0"), Argument::key_only("H/2")]
    );
    assert_eq!(overlay.destination_labels, vec!["out"]);
}

#[test]
fn multiline_expression() {
    let graph = parse(
        "[0:v] scale=640:360 [small];\n\
         [small] pad=w=1280:h=720:x=320:y=180 [out]\n",
    )
    .unwrap();
    assert_eq!(graph.len(), 2);
    assert_eq!(graph[1][0].value_of("x"), Some("320"));
}

#[test]
fn empty_runs_never_produce_entries() {
    let graph = parse(";;null,,null;;").unwrap();
    assert_eq!(graph.len(), 1);
    assert_eq!(graph[0].len(), 2);
}

#[test]
fn leading_assign_in_argument_is_dropped() {
    let graph = parse("f=a:==b").unwrap();
    assert_eq!(
        graph[0][0].arguments,
        vec![Argument::key_only("a"), Argument::key_only("b")]
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn stray_close_bracket() {
    let err = parse("null;]a").unwrap_err();
    assert_eq!(err, Error::unmatched_bracket(LabelPhase::Source, "]a"));
}

#[test]
fn unclosed_destination_label() {
    let err = parse("[a]b[").unwrap_err();
    assert_eq!(err.phase(), LabelPhase::Destination);
    assert_eq!(err.chain(), "[a]b[");
}

#[test]
fn content_after_destination_labels() {
    let err = parse("[in]null[out]extra").unwrap_err();
    assert!(matches!(err, Error::TrailingContentAfterLabels { .. }));
    assert!(err.to_string().contains("`e`"));
}

#[test]
fn same_input_fails_the_same_way() {
    let first = parse("a[b]]").unwrap_err();
    let second = parse("a[b]]").unwrap_err();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Custom definitions
// ---------------------------------------------------------------------------

/// A definition that only keeps what a graph builder needs for routing.
#[derive(Debug, Default, PartialEq)]
struct Route {
    inputs: usize,
    outputs: usize,
    filter: String,
}

impl FilterDefinition for Route {
    fn set_source_labels(&mut self, labels: Vec<String>) {
        self.inputs = labels.len();
    }
    fn set_destination_labels(&mut self, labels: Vec<String>) {
        self.outputs = labels.len();
    }
    fn set_filter_name(&mut self, name: String) {
        self.filter = name;
    }
    fn set_arguments(&mut self, _arguments: Vec<Argument>) {}
}

#[test]
fn custom_definition_via_factory() {
    let routes = parse_with(SAMPLES[2], Route::default).unwrap();
    assert_eq!(
        routes[2][0],
        Route {
            inputs: 2,
            outputs: 1,
            filter: "overlay".into(),
        }
    );
}

#[test]
fn custom_definition_via_default() {
    let parser = FilterGraphParser::new("[a][b]hstack[c]");
    let routes = parser.parse::<Route>().unwrap();
    assert_eq!(routes[0][0].inputs, 2);
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn tokens_render_back_to_significant_text() {
    for input in [r"a\'b\c", r"[0:v]scale=w=1\,2", "abc;d,e:f=g[h]"] {
        assert_eq!(render_tokens(&tokenize(input)), input);
    }
}

#[test]
fn rendered_graphs_parse_identically() {
    for input in SAMPLES {
        let graph = parse(input).unwrap();
        let rendered = render_graph(&graph);
        assert_eq!(parse(&rendered).unwrap(), graph, "round trip of {input}");
    }
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn independent_parses_on_separate_threads() {
    let results: Vec<Vec<Vec<FilterNode>>> = std::thread::scope(|s| {
        let handles: Vec<_> = SAMPLES
            .iter()
            .map(|input| s.spawn(move || parse(input).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (input, graph) in SAMPLES.iter().zip(&results) {
        assert_eq!(&parse(input).unwrap(), graph);
    }
}

#[test]
fn results_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FilterNode>();
    assert_send_sync::<Error>();
    assert_send_sync::<FilterGraphParser<'static>>();
}
