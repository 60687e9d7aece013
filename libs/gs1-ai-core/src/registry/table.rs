//! The AI table itself.
//!
//! Entries follow the structure of the GS1 General Specifications AI
//! table: each entry names a 2-4 digit key, whether it wants a trailing
//! FNC1 when another AI follows, up to three components (of the five
//! slots available), and a short title.
//!
//! `fnc1_required` is kept in lock-step with [`super::FIXED_PREFIX_SET`]
//! for every entry below: the bracketed and Digital-Link parsers decide
//! whether to suppress a trailing FNC1 purely from an AI's two-digit
//! prefix, so an entry whose `fnc1_required` disagreed with its prefix's
//! set membership would make the parsers and the element-string
//! validator contradict each other on the very same input. A small
//! number of AIs that are fixed-length in value (e.g. `402` GSIN, `422`
//! ORIGIN COUNTRY) still carry `fnc1_required = true` as a result,
//! because their prefix ("40", "42") is outside the set — this mirrors
//! the reference engine's table, which keys the no-FNC1 behaviour off
//! the prefix list rather than off each AI's own length.

use super::{AiComponent as C, AiDefinition};

macro_rules! ai {
    ($key:expr, $fnc1:expr, $title:expr; $c0:expr) => {
        AiDefinition {
            ai: $key,
            fnc1_required: $fnc1,
            components: [$c0, C::NONE, C::NONE, C::NONE, C::NONE],
            title: $title,
        }
    };
    ($key:expr, $fnc1:expr, $title:expr; $c0:expr, $c1:expr) => {
        AiDefinition {
            ai: $key,
            fnc1_required: $fnc1,
            components: [$c0, $c1, C::NONE, C::NONE, C::NONE],
            title: $title,
        }
    };
    ($key:expr, $fnc1:expr, $title:expr; $c0:expr, $c1:expr, $c2:expr) => {
        AiDefinition {
            ai: $key,
            fnc1_required: $fnc1,
            components: [$c0, $c1, $c2, C::NONE, C::NONE],
            title: $title,
        }
    };
}

/// A fixed-length N6 measurement AI family (net/gross weight, length,
/// area, volume, …): six sibling AIs sharing a `title`, one per decimal
/// indicator digit `0`-`5`. All measurement prefixes (`31`-`36`) are in
/// [`super::FIXED_PREFIX_SET`], so every variant is `fnc1_required: false`.
macro_rules! measure6 {
    ($base:literal, $title:literal) => {
        ai!(concat!($base, "0"), false, $title; C::n(6)),
        ai!(concat!($base, "1"), false, $title; C::n(6)),
        ai!(concat!($base, "2"), false, $title; C::n(6)),
        ai!(concat!($base, "3"), false, $title; C::n(6)),
        ai!(concat!($base, "4"), false, $title; C::n(6)),
        ai!(concat!($base, "5"), false, $title; C::n(6))
    };
}

/// A variable amount-with-ISO-currency-code AI family: ten sibling AIs
/// (decimal indicator `0`-`9`), each `N3` currency code followed by a
/// variable `N1..15` amount. Prefix `39` is not in the fixed-prefix set.
macro_rules! money_with_currency10 {
    ($base:literal, $title:literal) => {
        ai!(concat!($base, "0"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "1"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "2"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "3"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "4"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "5"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "6"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "7"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "8"), true, $title; C::n(3), C::nr(1, 15)),
        ai!(concat!($base, "9"), true, $title; C::n(3), C::nr(1, 15))
    };
}

/// A variable local-currency amount AI family: ten sibling AIs, each a
/// single variable `N1..15` amount with no currency code.
macro_rules! money_local10 {
    ($base:literal, $title:literal) => {
        ai!(concat!($base, "0"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "1"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "2"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "3"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "4"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "5"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "6"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "7"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "8"), true, $title; C::nr(1, 15)),
        ai!(concat!($base, "9"), true, $title; C::nr(1, 15))
    };
}

pub const TABLE: &[AiDefinition] = &[
    // ---- Identification ----
    ai!("00", false, "SSCC"; C::nchk(18)),
    ai!("01", false, "GTIN"; C::nchk(14)),
    ai!("02", false, "CONTENT"; C::nchk(14)),

    // ---- Traceability ----
    ai!("10", true, "BATCH/LOT"; C::x(1, 20)),
    ai!("11", false, "PROD DATE"; C::n(6)),
    ai!("12", false, "DUE DATE"; C::n(6)),
    ai!("13", false, "PACK DATE"; C::n(6)),
    ai!("15", false, "BEST BEFORE OR BEST BY"; C::n(6)),
    ai!("16", false, "SELL BY"; C::n(6)),
    ai!("17", false, "USE BY OR EXPIRY"; C::n(6)),
    ai!("20", false, "VARIANT"; C::n(2)),
    ai!("21", true, "SERIAL"; C::x(1, 20)),
    ai!("22", true, "CPV"; C::cpid(1, 20)),
    ai!("235", true, "TPX"; C::x(1, 28)),
    ai!("240", true, "ADDITIONAL ID"; C::x(1, 30)),
    ai!("241", true, "CUST. PART NO."; C::x(1, 30)),
    ai!("242", true, "MTO VARIANT"; C::nr(1, 6)),
    ai!("243", true, "PCN"; C::x(1, 20)),
    ai!("250", true, "SECONDARY SERIAL"; C::x(1, 30)),
    ai!("251", true, "REF. TO SOURCE"; C::x(1, 30)),
    ai!("253", true, "GDTI"; C::nchk(13), C::x(0, 17)),
    ai!("254", true, "GLN EXTENSION COMPONENT"; C::x(1, 20)),
    ai!("255", true, "GCN"; C::nchk(13), C::nr(0, 12)),
    ai!("30", true, "VAR. COUNT"; C::nr(1, 8)),

    // ---- Measurements (metric and imperial; decimal-point indicator is
    //      the AI's own trailing digit) ----
    measure6!("310", "NET WEIGHT (kg)"),
    measure6!("311", "LENGTH OR FIRST DIMENSION (m)"),
    measure6!("312", "WIDTH, DIAMETER, OR SECOND DIMENSION (m)"),
    measure6!("313", "DEPTH, THICKNESS, HEIGHT, OR THIRD DIMENSION (m)"),
    measure6!("314", "AREA (m2)"),
    measure6!("315", "NET VOLUME (l)"),
    measure6!("316", "NET VOLUME (m3)"),
    measure6!("320", "NET WEIGHT (lb)"),
    measure6!("321", "LENGTH OR FIRST DIMENSION (in)"),
    measure6!("322", "LENGTH OR FIRST DIMENSION (ft)"),
    measure6!("323", "LENGTH OR FIRST DIMENSION (yd)"),
    measure6!("324", "WIDTH, DIAMETER, OR SECOND DIMENSION (in)"),
    measure6!("325", "WIDTH, DIAMETER, OR SECOND DIMENSION (ft)"),
    measure6!("326", "WIDTH, DIAMETER, OR SECOND DIMENSION (yd)"),
    measure6!("327", "DEPTH, THICKNESS, HEIGHT, OR THIRD DIMENSION (in)"),
    measure6!("328", "DEPTH, THICKNESS, HEIGHT, OR THIRD DIMENSION (ft)"),
    measure6!("329", "DEPTH, THICKNESS, HEIGHT, OR THIRD DIMENSION (yd)"),
    measure6!("330", "GROSS WEIGHT (kg)"),
    measure6!("331", "LENGTH OR FIRST DIMENSION, LOGISTICS (m)"),
    measure6!("332", "WIDTH, DIAMETER, OR SECOND DIMENSION, LOGISTICS (m)"),
    measure6!("333", "DEPTH, THICKNESS, HEIGHT, OR THIRD DIMENSION, LOGISTICS (m)"),
    measure6!("334", "AREA, LOGISTICS (m2)"),
    measure6!("335", "GROSS VOLUME (l)"),
    measure6!("336", "GROSS VOLUME (m3)"),
    measure6!("337", "KG PER m2"),

    // ---- Amounts ----
    money_local10!("390", "AMOUNT PAYABLE - LOCAL CURRENCY"),
    money_with_currency10!("391", "AMOUNT PAYABLE WITH ISO CURRENCY CODE"),
    money_with_currency10!("392", "AMOUNT PAYABLE PER UNIT OF MEASURE WITH ISO CURRENCY CODE"),
    money_with_currency10!("393", "PRICE PER UNIT OF MEASURE WITH ISO CURRENCY CODE"),
    ai!("3940", true, "PERCENTAGE DISCOUNT OF A COUPON"; C::n(4)),
    ai!("3941", true, "PERCENTAGE DISCOUNT OF A COUPON"; C::n(4)),
    ai!("3942", true, "PERCENTAGE DISCOUNT OF A COUPON"; C::n(4)),
    ai!("3943", true, "PERCENTAGE DISCOUNT OF A COUPON"; C::n(4)),
    money_local10!("395", "AMOUNT PAYABLE PER UNIT OF MEASURE - LOCAL CURRENCY"),

    // ---- Logistics ----
    ai!("400", true, "CUST. PO NUMBER"; C::x(1, 30)),
    ai!("401", true, "GINC"; C::x(1, 30)),
    ai!("402", true, "GSIN"; C::nchk(17)),
    ai!("403", true, "ROUTE"; C::x(1, 30)),
    ai!("410", false, "SHIP TO LOC"; C::nchk(13)),
    ai!("411", false, "BILL TO"; C::nchk(13)),
    ai!("412", false, "PURCHASE FROM"; C::nchk(13)),
    ai!("413", false, "SHIP FOR LOC"; C::nchk(13)),
    ai!("414", false, "LOC"; C::nchk(13)),
    ai!("415", false, "PAY TO"; C::nchk(13)),
    ai!("416", false, "PROD/SERV LOC"; C::nchk(13)),
    ai!("417", false, "PARTY"; C::nchk(13)),
    ai!("421", true, "SHIP TO POST WITH ISO COUNTRY"; C::n(3), C::x(1, 9)),
    ai!("422", true, "ORIGIN COUNTRY"; C::n(3)),
    ai!("423", true, "COUNTRY - INITIAL PROCESS"; C::n(3), C::nr(0, 12)),
    ai!("424", true, "COUNTRY - PROCESS"; C::n(3)),
    ai!("425", true, "COUNTRY - DISASSEMBLY"; C::n(3), C::nr(0, 12)),
    ai!("426", true, "COUNTRY - FULL PROCESS"; C::n(3)),

    // ---- Food chain (NATO / AECMA subset) ----
    ai!("7001", true, "NSN"; C::n(13)),
    ai!("7002", true, "MEAT CUT"; C::x(1, 30)),
    ai!("7003", true, "EXPIRY TIME"; C::n(10)),
    ai!("7004", true, "ACTIVE POTENCY"; C::nr(1, 4)),
    ai!("7005", true, "CATCH AREA"; C::x(1, 12)),
    ai!("7006", true, "FIRST FREEZE DATE"; C::n(6)),
    ai!("7007", true, "HARVEST DATE"; C::nr(6, 12)),
    ai!("7008", true, "AQUATIC SPECIES"; C::x(1, 3)),
    ai!("7009", true, "FISHING GEAR TYPE"; C::x(1, 10)),
    ai!("7010", true, "PROD METHOD"; C::x(1, 2)),
    ai!("7020", true, "REFURB LOT"; C::x(1, 20)),
    ai!("7021", true, "FUNC STATUS"; C::x(1, 20)),
    ai!("7022", true, "REV STATUS"; C::x(1, 20)),
    ai!("7023", true, "GIAI - ASSEMBLY"; C::x(1, 30)),
    ai!("7040", true, "UIC+EXT"; C::x(1, 1), C::x(1, 3)),

    // ---- Identification keys, digital link attributes ----
    ai!("8001", true, "DIMENSIONS"; C::n(14)),
    ai!("8002", true, "CMT No"; C::x(1, 20)),
    ai!("8003", true, "GRAI"; C::n(1), C::nchk(13), C::x(0, 16)),
    ai!("8004", true, "GIAI"; C::x(1, 30)),
    ai!("8005", true, "PRICE PER UNIT"; C::n(6)),
    ai!("8006", true, "ITIP"; C::nchk(14), C::n(4)),
    ai!("8007", true, "IBAN"; C::x(1, 34)),
    ai!("8008", true, "PROD TIME"; C::n(8), C::nr(0, 4)),
    ai!("8009", true, "OPTSEN"; C::x(1, 50)),
    ai!("8010", true, "CPID"; C::x(1, 30)),
    ai!("8011", true, "CPID SERIAL"; C::nr(1, 12)),
    ai!("8012", true, "VERSION"; C::x(1, 20)),
    ai!("8013", true, "BUDI/GMN"; C::x(1, 30)),
    ai!("8017", true, "GSRN - PROVIDER"; C::nchk(18)),
    ai!("8018", true, "GSRN - RECIPIENT"; C::nchk(18)),
    ai!("8019", true, "SRIN"; C::nr(1, 10)),
    ai!("8020", true, "REF. NO."; C::x(1, 25)),
    ai!("8026", true, "ITIP CONTENT"; C::nchk(14), C::n(4)),
    ai!("8030", true, "DIGSIG"; C::x(1, 2047)),
    ai!("8110", true, "-"; C::x(1, 70)),
    ai!("8111", true, "POINTS"; C::n(4)),
    ai!("8112", true, "PAPERLESS COUPON CODE"; C::x(1, 70)),
    ai!("8200", true, "PRODUCT URL"; C::x(1, 70)),

    // Note: AIs 90-99 ("Information mutually agreed between trading
    // partners" / company-internal) are deliberately not registered here.
    // Their component structure is not fixed by the GS1 General
    // Specifications — it is defined bilaterally per trading relationship
    // — so there is no single correct entry to list, and a reimplementation
    // that carries them as a generic CSET82 catch-all makes them
    // indistinguishable from any other unregistered numeric AI. See
    // DESIGN.md for the Digital Link test case this affects.
];
