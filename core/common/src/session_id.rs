//! セッション ID 生成: 固定長 ASCII・辞書順＝時系列・同一 ms 内単調増加
//!
//! 形式: base62(0-9,A-Z,a-z) 8 文字。値 = (ms since 2020-01-01)<<8 | seq(0..255)。辞書順＝数値順。

use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

const EPOCH_MS: u64 = 1577836800000; // 2020-01-01 00:00:00 UTC
const SEQ_BITS: u64 = 8;
const SEQ_MASK: u64 = (1 << SEQ_BITS) - 1;
const BASE: u64 = 62;
const WIDTH: usize = 8;
const MAX_VAL: u64 = BASE.pow(WIDTH as u32) - 1;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 新しいセッション ID を 1 つ生成する。プロセス内では生成順に辞書順ソートされる。
pub fn generate_session_id() -> String {
    let ms_rel = now_ms_u64().saturating_sub(EPOCH_MS);
    let base = (ms_rel << SEQ_BITS).min(MAX_VAL);

    loop {
        let prev = LAST_ID.load(Ordering::SeqCst);
        let next = if (prev >> SEQ_BITS) < ms_rel {
            base
        } else {
            if (prev & SEQ_MASK) == SEQ_MASK {
                // 同一 ms で seq 枯渇、次の ms まで待つ
                std::thread::yield_now();
                continue;
            }
            (prev + 1).min(MAX_VAL)
        };
        if LAST_ID
            .compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return to_base62(next);
        }
    }
}

fn to_base62(mut n: u64) -> String {
    let mut buf = [b'0'; WIDTH];
    for slot in buf.iter_mut().rev() {
        *slot = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }
    buf.iter().map(|&b| b as char).collect()
}

fn now_ms_u64() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_fixed_length_ascii() {
        let id = generate_session_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn session_id_lexicographic_monotonic() {
        let ids: Vec<String> = (0..50).map(|_| generate_session_id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "rapid-fire IDs must be lexicographically monotonic");
    }

    #[test]
    fn to_base62_zero_and_small() {
        assert_eq!(to_base62(0), "00000000");
        assert_eq!(to_base62(61), "0000000z");
        assert_eq!(to_base62(62), "00000010");
    }
}
