use uniclass_ranges::IntervalSet;
use uniclass_ucd::{
    AggregatorOptions, ClassificationSets, GeneralCategory, PropertyAggregator, ReaderOptions,
    RecordReader, Subcategory,
};

/// An excerpt shaped like ICU's ppucd.txt: block defaults followed by the
/// `cp` records that refine them.
const PPUCD_EXCERPT: &str = "\
# Preparsed UCD generated by ICU preparseucd.py
ucd;15.1.0

property;Binary;WSpace;White_Space
property;Binary;XIDS;XID_Start
property;Enumerated;gc;General_Category
value;gc;Lu;Uppercase_Letter

defaults;0000..10FFFF;age=NA;bc=L;blk=NB;gc=Cn

block;0000..007F;age=1.1;blk=ASCII;ea=Na;gc=Cc;lb=AL;sc=Zyyy
cp;0000..0008;bc=BN;lb=CM
cp;0009;bc=S;lb=BA;WSpace
cp;000A..000D;bc=B;lb=BK;WSpace
cp;000E..001F;bc=BN;lb=CM
cp;0020;bc=WS;gc=Zs;lb=SP;na=SPACE;Pat_WS;WSpace
cp;0021..002F;bc=ON;gc=Po;Pat_Syn
cp;0030..0039;bc=EN;gc=Nd;nt=De;XIDC
cp;003A..0040;bc=ON;gc=Po;Pat_Syn
cp;0041..005A;Alpha;gc=Lu;Upper;XIDC;XIDS
cp;005B..0060;bc=ON;gc=Ps;Pat_Syn
cp;005F;gc=Pc;XIDC
cp;0061..007A;Alpha;gc=Ll;Lower;XIDC;XIDS
cp;007B..007E;bc=ON;gc=Sm;Pat_Syn
cp;007F;bc=BN
block;0080..00FF;age=1.1;blk=Latin_1_Sup;gc=Lo;XIDC;XIDS
cp;0080..009F;gc=Cc;-XIDC;-XIDS
cp;0085;gc=Cc;WSpace
cp;00A0;gc=Zs;WSpace;-XIDC;-XIDS
cp;00A1..00B4;gc=Po;-XIDC;-XIDS
cp;00B5;gc=Ll
cp;00B6..00BF;gc=So;-XIDC;-XIDS
cp;00D7;gc=Sm;-XIDC;-XIDS
cp;00F7;gc=Sm;-XIDC;-XIDS
unassigned;0378..0379;bc=L
";

fn aggregate(text: &str, options: AggregatorOptions) -> ClassificationSets {
    let reader = RecordReader::new(text.as_bytes(), ReaderOptions::default());
    let mut aggregator = PropertyAggregator::new(options);
    aggregator.apply_all(reader).expect("aggregation failed");
    aggregator.finish()
}

fn pairs(set: &IntervalSet) -> Vec<(u32, u32)> {
    set.iter().map(|r| (r.start(), r.end())).collect()
}

#[test]
fn test_excerpt_whitespace() {
    let sets = aggregate(PPUCD_EXCERPT, AggregatorOptions::default());
    assert_eq!(
        pairs(sets.space()),
        vec![(0x09, 0x0D), (0x20, 0x20), (0x85, 0x85), (0xA0, 0xA0)]
    );
}

#[test]
fn test_excerpt_identifiers() {
    let sets = aggregate(PPUCD_EXCERPT, AggregatorOptions::default());
    assert_eq!(
        pairs(sets.id_start()),
        vec![
            (0x41, 0x5A),
            (0x61, 0x7A),
            (0xB5, 0xB5),
            (0xC0, 0xD6),
            (0xD8, 0xF6),
            (0xF8, 0xFF)
        ]
    );
    assert!(sets.id_continue().contains(0x5F));
    assert!(sets.id_continue().contains(0x30));
    assert!(!sets.id_start().contains(0x30));
    assert!(!sets.id_continue().contains(0xD7));
}

#[test]
fn test_excerpt_graphic() {
    let sets = aggregate(PPUCD_EXCERPT, AggregatorOptions::default());
    let graphic = sets.graphic().unwrap();
    assert_eq!(pairs(graphic), vec![(0x20, 0x7E), (0xA0, 0xFF)]);
    assert!(!graphic.contains(0x7F));
    assert!(!graphic.contains(0x85));
}

#[test]
fn test_excerpt_categories_are_exclusive() {
    let sets = aggregate(PPUCD_EXCERPT, AggregatorOptions::default());
    for cp in 0..=0xFF {
        let owners = Subcategory::ALL
            .iter()
            .filter(|s| sets.subcategory(**s).unwrap().contains(cp))
            .count();
        assert_eq!(owners, 1, "codepoint {cp:#06X}");
        let majors = GeneralCategory::ALL
            .iter()
            .filter(|c| sets.category(**c).unwrap().contains(cp))
            .count();
        assert_eq!(majors, 1, "codepoint {cp:#06X}");
    }
    // 005F was first assigned Ps by the 005B..0060 record, then Pc.
    assert!(sets.subcategory(Subcategory::Pc).unwrap().contains(0x5F));
    assert!(!sets.subcategory(Subcategory::Ps).unwrap().contains(0x5F));
    assert_eq!(
        pairs(sets.subcategory(Subcategory::Ps).unwrap()),
        vec![(0x5B, 0x5E), (0x60, 0x60)]
    );
}

#[test]
fn test_simple_variant_ignores_categories() {
    let sets = aggregate(PPUCD_EXCERPT, AggregatorOptions { track_categories: false });
    assert!(sets.graphic().is_none());
    assert_eq!(sets.space().len(), 4);
    assert!(sets.id_start().contains(0xB5));
}

#[test]
fn test_all_sets_keep_invariants() {
    let sets = aggregate(PPUCD_EXCERPT, AggregatorOptions::default());
    let mut all = vec![sets.space(), sets.id_start(), sets.id_continue()];
    all.extend(sets.graphic());
    all.extend(Subcategory::ALL.iter().filter_map(|s| sets.subcategory(*s)));
    all.extend(GeneralCategory::ALL.iter().filter_map(|c| sets.category(*c)));
    for set in all {
        assert_eq!(set.first_violation(), None, "{set:?}");
    }
}
