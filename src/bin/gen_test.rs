//! Synthetic WhatsApp transcript generator for benchmarks and stress tests.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван Петров",
    "Мария",
    "村上",
    "محمد",
    "+44 7700 900123",
    "🔥FireUser🔥",
    "Dr. Who - The Doctor",
];

const SYSTEM_LINES: &[&str] = &[
    "Alice created group \"Weekend plans\"",
    "Bob added you to a group in the community: Neighbours",
    "You changed this group's icon",
    "Alice left",
];

const ENCRYPTION_NOTICE: &str = "Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them. Tap to learn more.";

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    generate_whatsapp(count, output);
}

fn generate_whatsapp(count: usize, output: &str) {
    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    // A real export opens with the encryption notice, which is a header
    // line without a sender.
    let notice = format!("{} - {}\n", header_stamp(0), ENCRYPTION_NOTICE);
    writer.write_all(notice.as_bytes()).unwrap();
    bytes_written += notice.len();

    for i in 0..count {
        let stamp = header_stamp(i);

        let line = if i % 500 == 250 {
            let system = SYSTEM_LINES.choose(&mut rng).unwrap();
            format!("{} - {}\n", stamp, system)
        } else {
            let sender = SENDERS.choose(&mut rng).unwrap();
            let body = generate_body(&mut rng, i);
            format!("{} - {}: {}\n", stamp, sender, body)
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
}

/// Alternates 24-hour and 12-hour headers, walking forward one day every
/// 200 messages starting at 01/01/23.
fn header_stamp(index: usize) -> String {
    let day_index = index / 200;
    let day = day_index % 28 + 1;
    let month = (day_index / 28) % 12 + 1;
    let year = 23 + day_index / (28 * 12);
    let minute = index % 60;
    let hour = (index / 60) % 24;

    let date = format!("{:02}/{:02}/{:02}", day, month, year % 100);

    if index % 2 == 0 {
        format!("{}, {:02}:{:02}", date, hour, minute)
    } else {
        let (hour12, meridiem) = match hour {
            0 => (12, "am"),
            1..=11 => (hour, "am"),
            12 => (12, "pm"),
            _ => (hour - 12, "pm"),
        };
        format!("{}, {}:{:02} {}", date, hour12, minute, meridiem)
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=4 => format!("Normal message #{} with some text", index),
        5 => format!("Multi-line message #{}\nsecond line\nthird line", index),
        6 => format!("Message with a colon: here it is #{}", index),
        7 => "<Media omitted>".to_string(),
        8 => format!("Кириллица: Привет мир! #{}", index),
        9 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),
        10 => {
            let words = rng.gen_range(20..200);
            (0..words).map(|_| "lorem").collect::<Vec<_>>().join(" ")
        }
        _ => "This message was deleted".to_string(),
    }
}
