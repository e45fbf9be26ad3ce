//! 转换器性质测试
//!
//! 覆盖往返一致性、跨刻度一致性、单调性与参考场景数值。

use db_scale_converter::core::{to_decibels, to_linear};
use db_scale_converter::{ConvertError, Scale, convert, convert_scale};

const REL_TOL: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, context: &str) {
    let tol = REL_TOL * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{context}: 实际 {actual}, 期望 {expected}"
    );
}

/// 覆盖常见电平范围的输入样本
fn sample_values() -> Vec<f64> {
    vec![-140.0, -60.5, -30.0, -3.0, -0.001, 0.0, 0.001, 4.0, 24.0, 94.0, 120.0, 194.0]
}

// ========== 往返一致性 ==========

#[test]
fn test_round_trip_on_input_scale() {
    for scale in Scale::ALL {
        for v in sample_values() {
            let result = convert(v, scale.name()).unwrap();
            assert_close(result[scale], v, &format!("{v} {scale} 往返"));
        }
    }
}

// ========== 跨刻度一致性 ==========

/// 从 s1 读出的 s2 数值，再以 s2 为输入转换，应得到相同的物理量
#[test]
fn test_cross_consistency() {
    for s1 in Scale::ALL {
        for s2 in Scale::ALL {
            for v in sample_values() {
                let via_s1 = convert(v, s1.name()).unwrap();
                let in_s2 = via_s1[s2];
                let via_s2 = convert_scale(in_s2, s2).unwrap();

                assert_close(via_s2[s2], in_s2, &format!("{v} {s1} → {s2}"));
                // 回到 s1 也应复原输入
                assert_close(via_s2[s1], v, &format!("{v} {s1} → {s2} → {s1}"));
            }
        }
    }
}

/// 两刻度间的差值是常数：20·log10(ref_a / ref_b)
#[test]
fn test_offsets_are_constant() {
    for a in Scale::ALL {
        for b in Scale::ALL {
            let offset = to_decibels(a.reference(), b.reference());
            for v in sample_values() {
                let result = convert(v, a.name()).unwrap();
                assert_close(result[b], v + offset, &format!("{a}→{b} 偏移"));
            }
        }
    }
}

// ========== 单调性 ==========

#[test]
fn test_monotonic_in_input() {
    let mut values = sample_values();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());

    for scale in Scale::ALL {
        let results: Vec<_> = values
            .iter()
            .map(|&v| convert(v, scale.name()).unwrap())
            .collect();

        for pair in results.windows(2) {
            for target in Scale::ALL {
                assert!(
                    pair[1][target] > pair[0][target],
                    "{scale} 输入递增时 {target} 输出应严格递增"
                );
            }
        }
    }
}

// ========== 错误路径 ==========

#[test]
fn test_invalid_scale_returns_typed_error() {
    for name in ["xyz", "dbv", "DBU", "SPL ", "", "dB"] {
        match convert(0.0, name) {
            Err(ConvertError::UnrecognizedScale { name: got, valid }) => {
                assert_eq!(got, name);
                assert_eq!(valid, vec!["dBV", "dBu", "dBW", "dBm", "SPL"]);
            }
            other => panic!("'{name}' 应返回UnrecognizedScale，实际 {other:?}"),
        }
    }
}

#[test]
fn test_error_message_names_input() {
    let err = convert(0.0, "xyz").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'xyz'"));
    assert!(msg.contains("dBV, dBu, dBW, dBm, SPL"));
}

/// 可成功转换的结果都必须满足往返精度，超出正规数范围的输入一律报错
#[test]
fn test_extreme_levels_never_lose_precision_silently() {
    for scale in Scale::ALL {
        let mut v = -7000.0;
        while v <= 7000.0 {
            match convert(v, scale.name()) {
                Ok(result) => assert_close(result[scale], v, &format!("{v} {scale} 极值往返")),
                Err(ConvertError::InvalidMagnitude { .. }) => {}
                Err(other) => panic!("{v} {scale} 意外错误: {other}"),
            }
            v += 25.0;
        }
    }
}

// ========== 参考场景 ==========

#[test]
fn test_known_values() {
    let dbv = convert(0.0, "dBV").unwrap();
    assert_eq!(dbv[Scale::DbV], 0.0);
    assert_close(dbv[Scale::DbU], 20.0 * (1.0f64 / 0.775).log10(), "0 dBV → dBu");

    let spl = convert(94.0, "SPL").unwrap();
    assert_close(spl[Scale::Spl], 94.0, "94 SPL 往返");
    // 94 dB SPL ≈ 1 Pa
    assert_close(to_linear(94.0, Scale::Spl.reference()), 1.0023744672545452, "94 SPL 线性值");

    let dbm = convert(0.0, "dBm").unwrap();
    assert_close(dbm[Scale::DbW], -30.0, "0 dBm → dBW");
}

#[test]
fn test_result_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<db_scale_converter::ConversionResult>();
    assert_send_sync::<Scale>();
}
