use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use novel_agent::core::app::App;
use novel_agent::core::config::Config;
use novel_agent::core::document::Document;
use novel_agent::ui::renderer::ui;
use novel_agent::ui::view::ConsoleView;
use novel_agent::ui::wrap::prewrap;
use novel_agent::utils::color::ColorDepth;
use ratatui::{backend::TestBackend, style::Style, Terminal};

fn make_app(chapters: usize, paragraphs: usize, base: &str) -> App {
    let mut document = Document::new(vec![
        "Protagonist: Lee".to_string(),
        "World: Neo-Seoul".to_string(),
    ]);
    let body = vec![base; paragraphs].join("\n");
    for i in 0..chapters {
        document.add_chapter_with_body(Some(&format!("Part {}", i + 1)), &body);
    }
    App::new(document)
}

fn bench_console_render(c: &mut Criterion) {
    let base = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor incididunt ut labore et dolore magna aliqua";
    let config = Config::default();

    for &paragraphs in &[100usize, 1000usize] {
        let app = make_app(20, paragraphs, base);
        let view = ConsoleView::new(app, &config, ColorDepth::Truecolor);
        let body = view.editor().body.clone();

        let mut group = c.benchmark_group(format!("console_render_paragraphs{}", paragraphs));
        group.throughput(Throughput::Elements(paragraphs as u64));

        for &(width, height) in &[(80u16, 24u16), (160u16, 48u16)] {
            let mut terminal = match Terminal::new(TestBackend::new(width, height)) {
                Ok(terminal) => terminal,
                Err(e) => panic!("test backend: {e}"),
            };
            group.bench_with_input(
                BenchmarkId::new("frame", format!("{width}x{height}")),
                &width,
                |b, _| {
                    b.iter(|| {
                        terminal
                            .draw(|f| ui(f, &view))
                            .expect("console frame renders");
                    })
                },
            );
            group.bench_with_input(BenchmarkId::new("prewrap", width), &width, |b, &w| {
                b.iter(|| prewrap(&body, Style::default(), w))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_console_render);
criterion_main!(benches);
