//! PMV/PPD 핵심 계산 회귀 테스트.
use comfort_toolbox::comfort::pmv_ppd::{
    compute_pmv_ppd, ppd_from_pmv, ComfortInput, MAX_ITERATIONS,
};

#[test]
fn default_input_regression() {
    // 기준값은 원본 구현에서 한 번 계산해 고정한 값이다.
    let res = compute_pmv_ppd(&ComfortInput::default());
    assert!(
        (res.pmv - 0.084_251_763_420_084).abs() < 1e-6,
        "pmv={}",
        res.pmv
    );
    assert!(
        (res.ppd_pct - 5.146_986_265_266_9).abs() < 1e-6,
        "ppd={}",
        res.ppd_pct
    );
    assert!(
        (res.clothing_surface_temp_c - 30.163_241_415_9).abs() < 1e-6,
        "tcl={}",
        res.clothing_surface_temp_c
    );
    assert!(res.converged);
    assert!(res.warnings.is_empty());
}

#[test]
fn pmv_increases_with_clothing_below_neutral() {
    // 중립점 아래에서는 의복을 더 입을수록 온열감이 올라간다.
    let mut last = f64::NEG_INFINITY;
    for clo in [0.3, 0.5, 0.8, 1.0] {
        let input = ComfortInput {
            clothing_clo: clo,
            ..ComfortInput::default()
        };
        let res = compute_pmv_ppd(&input);
        assert!(res.pmv > last, "clo={clo} pmv={} last={last}", res.pmv);
        last = res.pmv;
    }
}

#[test]
fn ppd_floor_near_neutral_pmv() {
    let res = compute_pmv_ppd(&ComfortInput::default());
    assert!(res.pmv.abs() < 0.1, "pmv={}", res.pmv);
    assert!(
        res.ppd_pct >= 5.0 && res.ppd_pct < 5.5,
        "ppd={}",
        res.ppd_pct
    );
}

#[test]
fn ppd_is_even_in_pmv() {
    // PPD는 PMV의 짝수 거듭제곱만 포함하므로 부호 반전에 대해 정확히 같아야 한다.
    let res = compute_pmv_ppd(&ComfortInput::default());
    assert_eq!(res.ppd_pct.to_bits(), ppd_from_pmv(res.pmv).to_bits());
    assert_eq!(
        ppd_from_pmv(res.pmv).to_bits(),
        ppd_from_pmv(-res.pmv).to_bits()
    );
    for v in [0.5, 1.0, 2.0, 3.5] {
        assert_eq!(ppd_from_pmv(v).to_bits(), ppd_from_pmv(-v).to_bits());
    }
}

#[test]
fn ppd_minimum_at_zero_pmv() {
    assert!((ppd_from_pmv(0.0) - 5.0).abs() < 1e-12);
}

#[test]
fn convergence_across_velocity_and_clothing_sweep() {
    // 대표 입력 범위 전체에서 150회 이내 수렴과 무경고를 보장한다.
    for i in 0..=10 {
        let vel = i as f64 * 0.5;
        for j in 0..=8 {
            let clo = j as f64 * 0.25;
            let input = ComfortInput {
                air_velocity_m_s: vel,
                clothing_clo: clo,
                ..ComfortInput::default()
            };
            let res = compute_pmv_ppd(&input);
            assert!(res.converged, "vel={vel} clo={clo}");
            assert!(
                res.iterations <= MAX_ITERATIONS,
                "vel={vel} clo={clo} n={}",
                res.iterations
            );
            assert!(res.warnings.is_empty(), "vel={vel} clo={clo}");
            assert!(res.pmv.is_finite() && res.ppd_pct.is_finite());
        }
    }
}

#[test]
fn repeated_calls_are_bitwise_identical() {
    let input = ComfortInput {
        air_temp_c: 27.3,
        radiant_temp_c: 26.1,
        air_velocity_m_s: 0.25,
        rel_humidity_pct: 61.0,
        metabolic_rate_met: 1.4,
        clothing_clo: 0.7,
        external_work_met: 0.1,
    };
    let a = compute_pmv_ppd(&input);
    let b = compute_pmv_ppd(&input);
    assert_eq!(a.pmv.to_bits(), b.pmv.to_bits());
    assert_eq!(a.ppd_pct.to_bits(), b.ppd_pct.to_bits());
}

#[test]
fn concurrent_calls_are_bitwise_identical() {
    let input = ComfortInput::default();
    let reference = compute_pmv_ppd(&input);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || compute_pmv_ppd(&input)))
        .collect();
    for h in handles {
        let res = h.join().expect("worker thread");
        assert_eq!(res.pmv.to_bits(), reference.pmv.to_bits());
        assert_eq!(res.ppd_pct.to_bits(), reference.ppd_pct.to_bits());
    }
}

#[test]
fn hot_and_cold_environments_have_expected_sign() {
    let hot = compute_pmv_ppd(&ComfortInput {
        air_temp_c: 32.0,
        radiant_temp_c: 32.0,
        rel_humidity_pct: 60.0,
        ..ComfortInput::default()
    });
    assert!(hot.pmv > 2.0, "pmv={}", hot.pmv);
    assert!(hot.ppd_pct > 80.0, "ppd={}", hot.ppd_pct);

    let cold = compute_pmv_ppd(&ComfortInput {
        air_temp_c: 14.0,
        radiant_temp_c: 14.0,
        air_velocity_m_s: 0.2,
        rel_humidity_pct: 40.0,
        ..ComfortInput::default()
    });
    assert!(cold.pmv < -3.0, "pmv={}", cold.pmv);
    assert!(cold.ppd_pct > 99.0, "ppd={}", cold.ppd_pct);
}

#[test]
fn nonsensical_inputs_pass_through_without_panic() {
    // 입력 검증이 없으므로 물리적으로 무의미한 값도 계산은 끝까지 진행된다.
    let res = compute_pmv_ppd(&ComfortInput {
        rel_humidity_pct: -20.0,
        ..ComfortInput::default()
    });
    assert!(res.pmv.is_finite());

    // air_vel < 0이면 sqrt 정의역 밖이라 NaN이 전파된다. 패닉만 없으면 된다.
    let res = compute_pmv_ppd(&ComfortInput {
        air_velocity_m_s: -1.0,
        ..ComfortInput::default()
    });
    assert!(res.pmv.is_nan() || res.pmv.is_finite());
}
