use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// f を number 回実行し、1回あたりの平均実行時間（秒）を ndigits 桁に
/// 丸めて返す。戻り値は計測時間であって f の結果ではない。
pub fn usage_time<T>(number: u32, ndigits: u32, mut f: impl FnMut() -> T) -> f64 {
    assert!(number >= 1, "number must be >= 1");

    let timer = Instant::now();
    for _ in 0..number {
        let _ = f();
    }
    let average = timer.elapsed().as_secs_f64() / number as f64;
    round_to(average, ndigits)
}

/// f を1回実行し、経過時間をラベル付きで stderr に記録して結果を返す。
pub fn profile_time<T>(label: &str, f: impl FnOnce() -> T) -> T {
    let timer = Instant::now();
    let value = f();
    eprintln!("[{:.3}s] {}", timer.elapsed().as_secs_f64(), label);
    value
}

fn round_to(value: f64, ndigits: u32) -> f64 {
    let scale = 10f64.powi(ndigits as i32);
    (value * scale).round() / scale
}

// ============================================================
// ヒープ使用量計測
// ============================================================

static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

/// 割当量を数えるグローバルアロケータ。
/// バイナリ側で `#[global_allocator]` として設置したときだけ
/// [`usage_memory`] が実際の値を報告する（未設置なら常に 0）。
pub struct CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let now = ALLOCATED.fetch_add(layout.size(), Ordering::Relaxed) + layout.size();
            PEAK.fetch_max(now, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        ALLOCATED.fetch_sub(layout.size(), Ordering::Relaxed);
    }
}

/// f 実行中のヒープ使用量の増分ピーク（バイト）を計測し、結果と共に返す。
/// 計測はプロセス全体のカウンタに基づくので、並行して大きな割当をする
/// スレッドがあると値に混ざる。
pub fn usage_memory<T>(f: impl FnOnce() -> T) -> (T, usize) {
    let before = ALLOCATED.load(Ordering::Relaxed);
    PEAK.store(before, Ordering::Relaxed);

    let value = f();

    let peak = PEAK.load(Ordering::Relaxed);
    (value, peak.saturating_sub(before))
}
