//! Per-frame cost benchmarks for the view-state core and page renderer.
//!
//! The event loop redraws at ~30 fps while anything animates, so signal
//! recomputation and a full frame render must stay well under 33 ms.
//!
//! Run with: cargo bench --bench signal_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::config::ResolvedConfig;
use folio::model::PortfolioContent;
use folio::state::AppState;
use folio::view::{render_page, PageStyles};
use folio::view_state::{AnimationSequencer, ScrollRegion, SequenceSpec, Timestamp};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn app_state(columns: u16, rows: u16) -> AppState {
    let content = PortfolioContent::builtin().expect("built-in content parses");
    AppState::new(content, &ResolvedConfig::default(), columns, rows)
}

fn bench_scroll_progress(c: &mut Criterion) {
    let region = ScrollRegion::new(0.0, 1_280.0);
    c.bench_function("scroll_progress_sweep", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for scroll in 0..2_000 {
                sum += region.progress_at(black_box(scroll as f64)).get();
            }
            sum
        })
    });
}

fn bench_sequencer_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer_phases");
    for count in [8usize, 64, 512] {
        let mut sequencer = AnimationSequencer::new(count, SequenceSpec::from_millis(0, 50, 600));
        sequencer.start(Timestamp::ZERO);
        group.bench_with_input(BenchmarkId::from_parameter(count), &sequencer, |b, seq| {
            b.iter(|| seq.phases(black_box(Timestamp::from_millis(700))))
        });
    }
    group.finish();
}

fn bench_scroll_through_page(c: &mut Criterion) {
    c.bench_function("scroll_through_page", |b| {
        b.iter_batched(
            || app_state(140, 40),
            |mut state| {
                let max = state.layout().max_scroll(state.page_rows());
                for _ in 0..max {
                    state.scroll_by(1);
                }
                state
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let styles = PageStyles::default();

    for (name, columns) in [("mobile", 60u16), ("tablet", 110), ("desktop", 140)] {
        let mut state = app_state(columns, 40);
        state.advance_to(Timestamp::from_millis(700));
        let mut terminal = Terminal::new(TestBackend::new(columns, 40)).expect("test backend");

        group.bench_function(name, |b| {
            b.iter(|| {
                terminal
                    .draw(|frame| render_page(frame, &state, &styles, today))
                    .expect("draw");
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scroll_progress,
    bench_sequencer_phases,
    bench_scroll_through_page,
    bench_render_frame
);
criterion_main!(benches);
