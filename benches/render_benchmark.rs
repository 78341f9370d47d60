//! Performance benchmarks for building and drawing the view trees
//!
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hooks_deck::adapters::MockHttpClient;
use hooks_deck::app::{App, Screen};
use hooks_deck::config::DeckConfig;
use hooks_deck::observability::ConsoleBuffer;
use hooks_deck::ui;
use hooks_deck::view::ViewEvent;
use ratatui::{backend::TestBackend, Terminal};

fn app_on(screen: Screen) -> App {
    let config = DeckConfig::default().with_initial_screen(screen);
    let console = ConsoleBuffer::default();
    for i in 0..100 {
        console.log(tracing::Level::INFO, "bench", format!("entry {}", i));
    }
    let mut app = App::new(&config, Arc::new(MockHttpClient::new()), console);
    app.start();
    app
}

/// Benchmark building the document for each tree
fn bench_build_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_document");

    for screen in Screen::ALL {
        let mut app = app_on(screen);
        group.bench_function(BenchmarkId::from_parameter(screen), |b| {
            b.iter(|| black_box(app.build_document()));
        });
    }

    group.finish();
}

/// Benchmark a full frame draw at several terminal sizes
fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    for (width, height) in [(80u16, 24u16), (120, 40), (200, 60)] {
        let mut app = app_on(Screen::Concepts);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        group.bench_function(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            |b| {
                b.iter(|| {
                    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark input handling followed by a rebuild (typing into a field)
fn bench_type_and_rebuild(c: &mut Criterion) {
    let mut app = app_on(Screen::Practice);
    app.dispatch(ViewEvent::Click(hooks_deck::trees::practice::NAME_INPUT));

    c.bench_function("type_and_rebuild", |b| {
        b.iter(|| {
            app.dispatch(ViewEvent::Insert('x'));
            app.dispatch(ViewEvent::Backspace);
            black_box(app.build_document())
        });
    });
}

criterion_group!(
    benches,
    bench_build_document,
    bench_full_frame,
    bench_type_and_rebuild
);
criterion_main!(benches);
