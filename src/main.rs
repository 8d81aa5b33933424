use algo_etude::*;
use num_bigint::BigUint;
use std::env;
use std::time::Instant;

// usage_memory が実際の値を報告できるよう、バイナリでは計数アロケータを設置する
#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn print_usage() {
    eprintln!("古典アルゴリズム教材集 (ビーズソート / バブルソート / シラキュース数列)");
    eprintln!();
    eprintln!("使い方:");
    eprintln!("  algo-etude bead <数列>             ビーズソート (非負整数をカンマ区切りで)");
    eprintln!("  algo-etude bubble <数列>           バブルソート (整数をカンマ区切りで)");
    eprintln!("  algo-etude syracuse <n>            シラキュース数列 (1に到達するまで)");
    eprintln!("  algo-etude verify <start> <end>    反復版と再帰版の一致検証");
    eprintln!("  algo-etude quadratic <a> <b> <c>   二次方程式 ax^2+bx+c=0 を解く");
    eprintln!();
    eprintln!("例:");
    eprintln!("  algo-etude bead 4,3,8,2,7,1,9,5,0,6");
    eprintln!("  algo-etude bubble 4,7,2,11,1,8,0");
    eprintln!("  algo-etude syracuse 27");
    eprintln!("  algo-etude verify 1 9999");
    eprintln!("  algo-etude quadratic 1 2 10");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "bead" => cmd_bead(&args[2..]),
        "bubble" => cmd_bubble(&args[2..]),
        "syracuse" => cmd_syracuse(&args[2..]),
        "verify" => cmd_verify(&args[2..]),
        "quadratic" => cmd_quadratic(&args[2..]),
        _ => {
            eprintln!("不明なコマンド: {}", args[1]);
            print_usage();
        }
    }
}

fn parse_i64(s: &str) -> i64 {
    s.trim().parse::<i64>().unwrap_or_else(|_| {
        eprintln!("整数を解析できません: {}", s);
        std::process::exit(1);
    })
}

fn parse_f64(s: &str) -> f64 {
    s.trim().parse::<f64>().unwrap_or_else(|_| {
        eprintln!("数値を解析できません: {}", s);
        std::process::exit(1);
    })
}

fn parse_csv(s: &str) -> Vec<i64> {
    s.split(',').map(parse_i64).collect()
}

fn join_values(items: &[i64]) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_bead(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: algo-etude bead <数列>");
        return;
    }

    let unsorted = parse_csv(&args[0]);
    println!("入力 = [{}]", join_values(&unsorted));

    let timer = Instant::now();
    match bead_sort(unsorted.iter().copied()) {
        Ok(sorted) => {
            let elapsed = timer.elapsed();
            println!("整列 = [{}]", join_values(&sorted));
            println!("計算時間 = {:?}", elapsed);
        }
        Err(e) => {
            eprintln!("入力エラー: {}", e);
            std::process::exit(1);
        }
    }
}

fn cmd_bubble(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: algo-etude bubble <数列>");
        return;
    }

    let unsorted = parse_csv(&args[0]);
    println!("入力 = [{}]", join_values(&unsorted));

    let timer = Instant::now();
    let (sorted, stats) = bubble_sort_with_stats(unsorted.iter().copied());
    let elapsed = timer.elapsed();

    println!("整列 = [{}]", join_values(&sorted));
    println!();
    println!("--- 統計 ---");
    println!("パス数   = {}", stats.passes);
    println!("交換数   = {}", stats.swaps);
    println!("計算時間 = {:?}", elapsed);
}

fn cmd_syracuse(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: algo-etude syracuse <n>");
        return;
    }

    let n = parse_i64(&args[0]);
    println!("シラキュース数列: n = {}", n);
    println!();

    let timer = Instant::now();
    let (sequence, peak_bytes) = usage_memory(|| syracuse_sequence(n));
    let elapsed = timer.elapsed();

    if sequence.is_empty() {
        println!("(空列: n < 1)");
        return;
    }

    // 画面表示（長すぎる場合は省略）
    let show_limit = 50;
    println!("  {:>6}  {:>50}", "項", "値");
    for (i, value) in sequence.iter().enumerate() {
        if i < show_limit || i >= sequence.len().saturating_sub(5) {
            println!("  {:>6}  {:>50}", i, format_big(value));
        } else if i == show_limit {
            println!("  ... ({} 項省略) ...", sequence.len() - show_limit - 5);
        }
    }

    let max_value = sequence.iter().max().unwrap();

    println!();
    println!("--- 統計 ---");
    println!("軌道長       = {}", sequence.len());
    println!("最大値       = {}", format_big(max_value));
    println!("ヒープ使用量 = {} bytes", peak_bytes);
    println!("計算時間     = {:?}", elapsed);
}

fn cmd_verify(args: &[String]) {
    if args.len() < 2 {
        eprintln!("使い方: algo-etude verify <start> <end>");
        return;
    }

    let start = parse_i64(&args[0]);
    let end = parse_i64(&args[1]);

    let num_threads = rayon::current_num_threads();
    println!("範囲検証 (反復版 vs 再帰版): [{}, {}]", start, end);
    println!("({}スレッド並列)", num_threads);
    println!();

    let timer = Instant::now();
    let last_print = std::sync::Mutex::new(Instant::now());
    let result = verify_range_parallel(start, end, |done, total| {
        if total > 0 {
            let now = Instant::now();
            if let Ok(mut lp) = last_print.try_lock() {
                if now.duration_since(*lp).as_millis() >= 500 {
                    let elapsed = timer.elapsed();
                    let pct = done as f64 / total as f64 * 100.0;
                    let nps = done as f64 / elapsed.as_secs_f64();
                    eprint!(
                        "\x1b[2K\r  [{:.1}s] {}/{} ({:.1}%) | {:.0} seeds/s",
                        elapsed.as_secs_f64(),
                        done,
                        total,
                        pct,
                        nps
                    );
                    *lp = now;
                }
            }
        }
    });
    let elapsed = timer.elapsed();
    eprintln!();

    println!("--- 結果 ---");
    println!("検証した種の数 = {}", result.total_checked);
    println!("全て一致       = {}", if result.all_match { "はい" } else { "いいえ" });
    println!("最長軌道       = {} 項 (n={})", result.max_length, result.max_length_seed);
    println!("計算時間       = {:?}", elapsed);

    if !result.mismatches.is_empty() {
        println!("不一致の種     = {} 個", result.mismatches.len());
        for seed in result.mismatches.iter().take(10) {
            println!("  {}", seed);
        }
        std::process::exit(1);
    }
}

fn cmd_quadratic(args: &[String]) {
    if args.len() < 3 {
        eprintln!("使い方: algo-etude quadratic <a> <b> <c>");
        return;
    }

    let a = parse_f64(&args[0]);
    let b = parse_f64(&args[1]);
    let c = parse_f64(&args[2]);

    println!("{}x^2 + {}x + {} = 0", a, b, c);

    match quadratic_equation(a, b, c) {
        Ok((x_1, x_2)) => {
            println!("x1 = {}", x_1);
            println!("x2 = {}", x_2);
        }
        Err(e) => {
            eprintln!("入力エラー: {}", e);
            std::process::exit(1);
        }
    }
}

fn format_big(n: &BigUint) -> String {
    let s = n.to_string();
    if s.len() <= 50 {
        s
    } else {
        format!("{}...{} ({}桁)", &s[..20], &s[s.len() - 20..], s.len())
    }
}
