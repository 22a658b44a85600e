#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use nego_core::{
        crypto::{EphemeralSeed, StaticSeed},
        headers::{candidate_positions, Entry, MaxLenPolicy, Writer, WriterConfig},
        layout::{LayoutError, SuiteLevels},
        suite::{CipherSuite, KnownSuite, Suite},
        telemetry::LayoutStats,
    };

    fn known(budget: usize) -> SuiteLevels {
        [KnownSuite::Ed25519, KnownSuite::P256, KnownSuite::P384, KnownSuite::P521]
            .into_iter()
            .map(|s| (s.suite(), budget))
            .collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x6e65_676f)
    }

    #[test]
    fn writer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Writer>();
    }

    #[test]
    fn layout_caches_committed_positions() {
        let mut w = Writer::new();
        let len = w.layout(&known(3), 48, &[], &mut rng()).unwrap();
        assert_eq!(len, 792);
        assert_eq!(w.header_len(), 792);
        assert_eq!(w.committed().len(), 4);
        assert_eq!(w.committed().end(), 792);
        assert_eq!(w.chosen_level(&KnownSuite::P256.suite()), Some(2));
        assert_eq!(w.chosen_level(&CipherSuite::new("absent", 32)), None);
        assert_eq!(w.suites().len(), 4);
        assert_eq!(w.stats().unwrap().header_len, 792);
    }

    #[test]
    fn failed_layout_clears_cached_result() {
        let mut w = Writer::new();
        w.layout(&known(3), 48, &[], &mut rng()).unwrap();

        let clash: SuiteLevels = [(CipherSuite::new("X", 32), 1), (CipherSuite::new("Y", 48), 1)]
            .into_iter()
            .collect();
        let err = w.layout(&clash, 48, &[], &mut rng()).unwrap_err();
        assert_eq!(err, LayoutError::NoViablePosition { suite: "Y".into() });
        assert_eq!(w.header_len(), 0);
        assert!(w.committed().is_empty());
        assert!(w.suites().is_empty());
        assert!(w.stats().is_none());
    }

    #[test]
    fn identical_writers_agree() {
        let entries: Vec<Entry> = KnownSuite::ALL
            .iter()
            .filter(|s| **s != KnownSuite::Curve448)
            .map(|s| Entry::new(s.suite(), vec![0xAB; s.hide_len()], vec![0u8; 24]))
            .collect();

        let mut a = Writer::new();
        let mut b = Writer::new();
        let la = a.layout(&known(4), 32, &entries, &mut rng()).unwrap();
        let lb = b.layout(&known(4), 32, &entries, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(la, lb);
        assert_eq!(a.committed(), b.committed());
        for s in [KnownSuite::Ed25519, KnownSuite::P256, KnownSuite::P384, KnownSuite::P521] {
            assert_eq!(a.chosen_level(&s.suite()), b.chosen_level(&s.suite()));
        }
    }

    #[test]
    fn advisory_max_len_only_clamps_reach() {
        let mut w = Writer::new();
        w.set_max_len(500);
        let len = w.layout(&known(3), 0, &[], &mut rng()).unwrap();
        assert_eq!(len, 792);
        let stats = w.stats().unwrap();
        assert!(stats.clamped);
        assert_eq!(stats.reach, 500);
    }

    #[test]
    fn enforced_max_len_rejects_long_headers() {
        let mut w = Writer::with_config(WriterConfig {
            max_len: Some(500),
            max_len_policy: MaxLenPolicy::Enforce,
        });
        let err = w.layout(&known(3), 0, &[], &mut rng()).unwrap_err();
        assert_eq!(err, LayoutError::HeaderTooLong { len: 792, max: 500 });
        assert!(w.committed().is_empty());

        w.set_max_len(792);
        assert_eq!(w.layout(&known(3), 0, &[], &mut rng()).unwrap(), 792);
        assert!(!w.stats().unwrap().clamped);
    }

    #[test]
    fn zero_max_len_clears_limit() {
        let mut w = Writer::new();
        w.set_max_len(100);
        assert_eq!(w.config().max_len, Some(100));
        w.set_max_len(0);
        assert_eq!(w.config().max_len, None);
        w.set_max_len_policy(MaxLenPolicy::Enforce);
        assert_eq!(w.config().max_len_policy, MaxLenPolicy::Enforce);
    }

    #[test]
    fn config_loads_from_json() {
        let cfg = WriterConfig::from_json(r#"{"max_len": 4096, "max_len_policy": "enforce"}"#).unwrap();
        assert_eq!(cfg.max_len, Some(4096));
        assert_eq!(cfg.max_len_policy, MaxLenPolicy::Enforce);

        let cfg = WriterConfig::from_json("{}").unwrap();
        assert_eq!(cfg, WriterConfig::default());
        assert_eq!(cfg.max_len_policy, MaxLenPolicy::Advisory);

        assert!(WriterConfig::from_json(r#"{"max_len_policy": "strict"}"#).is_err());
    }

    #[test]
    fn stats_snapshot_serializes() {
        let mut w = Writer::new();
        w.layout(&known(3), 0, &[], &mut rng()).unwrap();
        let stats = w.stats().unwrap().clone();
        let json = stats.to_json().unwrap();
        let back: LayoutStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
        assert!(stats.density() > 0.0 && stats.density() <= 1.0);
        assert_eq!(LayoutStats::default().density(), 0.0);
    }

    #[test]
    fn recipient_candidates_cover_committed_slot() {
        let suites = known(4);
        let mut w = Writer::new();
        w.layout(&suites, 0, &[], &mut rng()).unwrap();

        for si in w.suites() {
            let cands = candidate_positions(&si.suite, suites[&si.suite], &StaticSeed).unwrap();
            assert_eq!(cands.len(), 4);
            assert_eq!(cands[0], 0..si.plen);
            assert!(cands.contains(&si.chosen_slot().unwrap()));
        }
    }

    #[test]
    fn recipient_lookup_validates_inputs() {
        let err = candidate_positions(&CipherSuite::new("A", 32), 0, &StaticSeed).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidLevels { .. }));
    }

    #[test]
    fn ephemeral_seeds_drive_layout() {
        let order = [KnownSuite::Ed25519, KnownSuite::P256, KnownSuite::P384, KnownSuite::P521];
        let mut seeds = EphemeralSeed::new();
        for (i, s) in order.iter().enumerate() {
            seeds.insert(&s.suite(), vec![0x40 + i as u8; s.hide_len()]);
        }
        let suites = known(3);

        let mut w = Writer::new().with_seed_source(seeds.clone());
        let len = w.layout(&suites, 0, &[], &mut rng()).unwrap();
        assert_eq!(len, 924);
        assert_eq!(len, w.committed().end());

        let chosen: Vec<_> = order.iter().map(|s| w.chosen_level(&s.suite())).collect();
        assert_eq!(chosen, vec![Some(0), Some(2), Some(1), Some(2)]);

        for si in w.suites() {
            let cands = candidate_positions(&si.suite, 3, &seeds).unwrap();
            assert!(cands.contains(&si.chosen_slot().unwrap()), "{si}");
        }

        let ed = KnownSuite::Ed25519.suite();
        let fresh = candidate_positions(&ed, 3, &seeds).unwrap();
        assert_eq!(fresh, vec![0..32, 32..64, 128..160]);
        assert_ne!(fresh, candidate_positions(&ed, 3, &StaticSeed).unwrap());
    }

    #[test]
    fn wide_encoding_lays_out_at_offset_zero() {
        let suites: SuiteLevels = [(CipherSuite::new("wide", 2048), 1)].into_iter().collect();
        let mut w = Writer::new();
        assert_eq!(w.layout(&suites, 0, &[], &mut rng()).unwrap(), 2048);
        assert_eq!(w.chosen_level(&CipherSuite::new("wide", 2048)), Some(0));
    }

    #[test]
    fn ephemeral_layout_without_keys_fails() {
        let mut w = Writer::new().with_seed_source(EphemeralSeed::new());
        let err = w.layout(&known(2), 0, &[], &mut rng()).unwrap_err();
        assert!(matches!(err, LayoutError::MissingSeed { .. }));
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            LayoutError::TooManySuites { count: 300, max: 255 }.to_string(),
            "too many ciphersuites: 300 > 255"
        );
        assert_eq!(
            LayoutError::NoViablePosition { suite: "P256".into() }.to_string(),
            "no viable position for suite P256"
        );
    }
}
