pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// группа бенчмарков: функция $test вызывается для каждого кодпоинта набора
#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $body: expr) => {
        #[inline(never)]
        fn $test(codespace: &Codespace, codepoints: &[Codepoint])
        {
            for &codepoint in codepoints {
                criterion::black_box($body(codespace, codepoint));
            }
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let codespace = unicode_codespace_benches::codespace();

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (set_name, codepoints) in unicode_codespace_benches::codepoint_sets() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, set_name),
                    &(&codespace, codepoints.as_slice()),
                    |b, data| b.iter(|| $test(data.0, data.1)),
                );
            }

            group.finish();
        }
    };
}
