//! Tests for the analyzer module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::constants::routines;
    use crate::models::{
        AddressRange, Callee, Function, Identification, Reference, ReferenceKind, VersionTag,
    };
    use crate::program::ProgramModel;

    /// Digests registered for build 1.0.0
    const V100_COMPRESSED: &str = "f5d9aa2af3abef3070791057060ee93c";
    const V100_DECOMPRESSED: &str = "0bfaa4258b49b560bb5bdf4d353ec0f6";

    /// In-memory program model for driving the analyses
    struct MockProgram {
        format: String,
        md5: String,
        functions: Vec<Function>,
        references: Vec<Reference>,
    }

    impl MockProgram {
        fn new(format: &str, md5: &str) -> Self {
            Self {
                format: format.to_string(),
                md5: md5.to_string(),
                functions: Vec::new(),
                references: Vec::new(),
            }
        }

        fn switch_binary(md5: &str) -> Self {
            Self::new("Nintendo Switch Binary", md5)
        }

        fn with_function(mut self, entry: u64, size: u64, name: &str) -> Self {
            self.functions
                .push(Function::new(entry, size, Some(name.to_string())));
            self
        }

        fn with_reference(mut self, from: u64, to: u64, kind: ReferenceKind) -> Self {
            self.references.push(Reference::new(from, to, kind));
            self
        }
    }

    impl ProgramModel for MockProgram {
        fn executable_format(&self) -> &str {
            &self.format
        }

        fn executable_md5(&self) -> &str {
            &self.md5
        }

        fn function_at(&self, addr: u64) -> Option<Function> {
            self.functions.iter().find(|f| f.entry == addr).cloned()
        }

        fn references_from(&self, range: &AddressRange) -> Vec<Reference> {
            // References are declared in ascending origin order in these tests.
            self.references
                .iter()
                .filter(|r| range.contains(r.from))
                .copied()
                .collect()
        }
    }

    #[test]
    fn test_identify_rejects_foreign_format() {
        // The format gate fires before any digest comparison.
        let program = MockProgram::new("ELF", V100_COMPRESSED);
        let identification = Analyzer::new().identify(&program);
        assert_eq!(
            identification,
            Identification::UnsupportedFormat("ELF".to_string())
        );
        assert!(!identification.is_supported_format());
    }

    #[test]
    fn test_identify_matches_compressed_digest() {
        let program = MockProgram::switch_binary(V100_COMPRESSED);
        let identification = Analyzer::new().identify(&program);
        assert_eq!(identification.version().map(VersionTag::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_identify_matches_decompressed_digest() {
        let program = MockProgram::switch_binary(V100_DECOMPRESSED);
        let identification = Analyzer::new().identify(&program);
        assert_eq!(identification.version().map(VersionTag::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_identify_falls_back_to_wildcard_entry() {
        // An unknown digest of the supported format hits the unfingerprinted
        // 1.0.1 entry by default.
        let program = MockProgram::switch_binary("ffffffffffffffffffffffffffffffff");
        let identification = Analyzer::new().identify(&program);
        assert_eq!(identification.version().map(VersionTag::as_str), Some("1.0.1"));
    }

    #[test]
    fn test_identify_specific_entry_beats_later_wildcard() {
        // 1.0.0 is declared before the wildcard, so its digests never reach it.
        let program = MockProgram::switch_binary(V100_COMPRESSED);
        let identification = Analyzer::new().identify(&program);
        assert_eq!(identification.version().map(VersionTag::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_identify_strict_option_disables_wildcard() {
        let options = AnalyzerOptions {
            assume_unknown_compatible: false,
            ..Default::default()
        };
        let program = MockProgram::switch_binary("ffffffffffffffffffffffffffffffff");
        let identification = Analyzer::with_options(options).identify(&program);
        assert_eq!(identification, Identification::Unrecognized);
        assert!(identification.is_supported_format());
    }

    #[test]
    fn test_identify_is_a_pure_query() {
        let program = MockProgram::switch_binary(V100_COMPRESSED);
        let analyzer = Analyzer::new();
        assert_eq!(analyzer.identify(&program), analyzer.identify(&program));
    }

    #[test]
    fn test_resolve_routines_for_known_version() {
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x71011f3000, 0x10, "guard_acquire_impl")
            .with_function(0x71000003d4, 0x40, "read_config_impl");
        let version = VersionTag::new("1.0.0");

        let bindings = Analyzer::new().resolve_routines(&program, Some(&version));

        let acquire = &bindings[routines::CXA_GUARD_ACQUIRE];
        assert_eq!(acquire.address, Some(0x71011f3000));
        assert!(acquire.is_resolved());

        // Address registered for 1.0.0 but no function there in this program.
        let release = &bindings[routines::CXA_GUARD_RELEASE];
        assert_eq!(release.address, Some(0x71011f3010));
        assert!(!release.is_resolved());

        let config = &bindings[routines::READ_CONFIG_VALUE];
        assert_eq!(config.address, Some(0x71000003d4));
        assert!(config.is_resolved());
    }

    #[test]
    fn test_resolve_routines_uses_per_version_addresses() {
        let program = MockProgram::switch_binary("ffffffffffffffffffffffffffffffff")
            .with_function(0x71011f37e0, 0x10, "guard_acquire_impl");
        let version = VersionTag::new("1.0.1");

        let bindings = Analyzer::new().resolve_routines(&program, Some(&version));
        let acquire = &bindings[routines::CXA_GUARD_ACQUIRE];
        assert_eq!(acquire.address, Some(0x71011f37e0));
        assert!(acquire.is_resolved());
    }

    #[test]
    fn test_resolve_routines_without_version_keeps_fixed_subset() {
        let program = MockProgram::switch_binary("ffffffffffffffffffffffffffffffff")
            .with_function(0x7100080124, 0x20, "unk1_impl");

        let bindings = Analyzer::new().resolve_routines(&program, None);

        // Version-specific routines degrade to unresolved, never panic.
        assert_eq!(bindings[routines::CXA_GUARD_ACQUIRE].address, None);
        assert!(!bindings[routines::CXA_GUARD_ACQUIRE].is_resolved());
        assert!(!bindings[routines::CXA_GUARD_RELEASE].is_resolved());

        // Version-independent routines still bind.
        assert_eq!(bindings[routines::UNK1].address, Some(0x7100080124));
        assert!(bindings[routines::UNK1].is_resolved());
        assert_eq!(bindings[routines::UNK2].address, Some(0x7100000250));
    }

    #[test]
    fn test_resolve_routines_covers_every_known_name() {
        let program = MockProgram::switch_binary("ffffffffffffffffffffffffffffffff");
        let bindings = Analyzer::new().resolve_routines(&program, None);
        assert_eq!(bindings.len(), routines::KNOWN_ROUTINES.len());
    }

    #[test]
    fn test_extract_groups_params_with_their_call() {
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x100, "caller")
            .with_function(0x5000, 0x20, "f1")
            .with_function(0x6000, 0x20, "f2")
            .with_reference(0x1010, 0x2000, ReferenceKind::Param)
            .with_reference(0x1012, 0x2008, ReferenceKind::Param)
            .with_reference(0x1014, 0x5000, ReferenceKind::Call)
            .with_reference(0x1020, 0x2010, ReferenceKind::Param)
            .with_reference(0x1022, 0x6000, ReferenceKind::Call);
        let caller = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &caller);
        assert_eq!(sites.len(), 2);

        assert_eq!(sites[0].callee.address(), 0x5000);
        assert_eq!(sites[0].callee.function().unwrap().name.as_deref(), Some("f1"));
        assert_eq!(sites[0].params.len(), 2);
        assert_eq!(sites[0].params[0].from, 0x1010);
        assert_eq!(sites[0].params[1].from, 0x1012);

        assert_eq!(sites[1].callee.address(), 0x6000);
        assert_eq!(sites[1].params.len(), 1);
        assert_eq!(sites[1].params[0].from, 0x1020);
    }

    #[test]
    fn test_extract_drops_trailing_params() {
        // Parameter references with no subsequent call belong to no call site.
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x100, "caller")
            .with_reference(0x1010, 0x2000, ReferenceKind::Param)
            .with_reference(0x1012, 0x2008, ReferenceKind::Param);
        let caller = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &caller);
        assert!(sites.is_empty());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x100, "caller")
            .with_function(0x5000, 0x20, "f1")
            .with_reference(0x1010, 0x2000, ReferenceKind::Param)
            .with_reference(0x1014, 0x5000, ReferenceKind::Call);
        let caller = program.function_at(0x1000).unwrap();

        let analyzer = Analyzer::new();
        let first = analyzer.extract_call_sites(&program, &caller);
        let second = analyzer.extract_call_sites(&program, &caller);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_reports_unresolved_callee() {
        // No function at 0x9000; the call site is still emitted with its
        // parameters and is distinguishable from a zero-parameter call.
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x100, "caller")
            .with_reference(0x1010, 0x2000, ReferenceKind::Param)
            .with_reference(0x1014, 0x9000, ReferenceKind::Call);
        let caller = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &caller);
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].callee, Callee::Unresolved(0x9000));
        assert!(sites[0].callee.function().is_none());
        assert_eq!(sites[0].params.len(), 1);
    }

    #[test]
    fn test_extract_empty_body_yields_nothing() {
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0, "empty");
        let empty = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &empty);
        assert!(sites.is_empty());
    }

    #[test]
    fn test_extract_back_to_back_calls() {
        // The second call consumed nothing; it still gets its own call site
        // with an empty parameter list.
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x100, "caller")
            .with_function(0x5000, 0x20, "f1")
            .with_function(0x6000, 0x20, "f2")
            .with_reference(0x1010, 0x2000, ReferenceKind::Param)
            .with_reference(0x1014, 0x5000, ReferenceKind::Call)
            .with_reference(0x1018, 0x6000, ReferenceKind::Call);
        let caller = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &caller);
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].params.len(), 1);
        assert!(sites[1].params.is_empty());
    }

    #[test]
    fn test_extract_ignores_unclassified_references() {
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x100, "caller")
            .with_function(0x5000, 0x20, "f1")
            .with_reference(0x1008, 0x3000, ReferenceKind::Other)
            .with_reference(0x1010, 0x2000, ReferenceKind::Param)
            .with_reference(0x1012, 0x4000, ReferenceKind::Other)
            .with_reference(0x1014, 0x5000, ReferenceKind::Call);
        let caller = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &caller);
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].params.len(), 1);
        assert_eq!(sites[0].params[0].from, 0x1010);
    }

    #[test]
    fn test_extract_only_scans_the_function_body() {
        // References originating outside the body are someone else's.
        let program = MockProgram::switch_binary(V100_COMPRESSED)
            .with_function(0x1000, 0x10, "caller")
            .with_function(0x5000, 0x20, "f1")
            .with_reference(0x0f00, 0x2000, ReferenceKind::Param)
            .with_reference(0x1004, 0x5000, ReferenceKind::Call)
            .with_reference(0x2000, 0x5000, ReferenceKind::Call);
        let caller = program.function_at(0x1000).unwrap();

        let sites = Analyzer::new().extract_call_sites(&program, &caller);
        assert_eq!(sites.len(), 1);
        assert!(sites[0].params.is_empty());
    }

    #[test]
    fn test_symbol_source_follows_force_rename() {
        let mut options = AnalyzerOptions::default();
        assert_eq!(options.symbol_source(), SymbolSource::Analysis);
        options.force_rename = true;
        assert_eq!(options.symbol_source(), SymbolSource::UserDefined);
    }
}
