//! CSR address to name table.

/// Name rendered for CSR addresses missing from the table.
pub const CSR_UNKNOWN: &str = "(unknown)";

/// Look up a CSR name by address.
///
/// Only the listed counters of each `hpmcounter`/`pmp` range have names.
#[must_use]
pub const fn csr_lookup(csr: u16) -> Option<&'static str> {
    let name = match csr {
        // User trap setup and handling
        0x000 => "ustatus",
        0x004 => "uie",
        0x005 => "utvec",
        0x040 => "uscratch",
        0x041 => "uepc",
        0x042 => "ucause",
        0x043 => "utval",
        0x044 => "uip",
        // Floating point
        0x001 => "fflags",
        0x002 => "frm",
        0x003 => "fcsr",
        // User counters
        0xC00 => "cycle",
        0xC01 => "time",
        0xC02 => "instret",
        0xC03 => "hpmcounter3",
        0xC04 => "hpmcounter4",
        0xC1F => "hpmcounter31",
        0xC80 => "cycleh",
        0xC81 => "timeh",
        0xC82 => "instreth",
        0xC83 => "hpmcounter3h",
        0xC84 => "hpmcounter4h",
        0xC9F => "hpmcounter31h",
        // Supervisor
        0x100 => "sstatus",
        0x102 => "sedeleg",
        0x103 => "sideleg",
        0x104 => "sie",
        0x105 => "stvec",
        0x106 => "scounteren",
        0x140 => "sscratch",
        0x141 => "sepc",
        0x142 => "scause",
        0x143 => "stval",
        0x144 => "sip",
        0x180 => "satp",
        // Hypervisor
        0x600 => "hstatus",
        0x602 => "hedeleg",
        0x603 => "hideleg",
        0x606 => "hcounteren",
        0x680 => "hgatp",
        0x605 => "htimedelta",
        0x615 => "htimedeltah",
        // Virtual supervisor
        0x200 => "vsstatus",
        0x204 => "vsie",
        0x205 => "vstvec",
        0x240 => "vsscratch",
        0x241 => "vsepc",
        0x242 => "vscause",
        0x243 => "vstval",
        0x244 => "vsip",
        0x280 => "vsatp",
        // Machine information
        0xF11 => "mvendorid",
        0xF12 => "marchid",
        0xF13 => "mimpid",
        0xF14 => "mhartid",
        // Machine trap setup and handling
        0x300 => "mstatus",
        0x301 => "misa",
        0x302 => "medeleg",
        0x303 => "mideleg",
        0x304 => "mie",
        0x305 => "mtvec",
        0x306 => "mcounteren",
        0x310 => "mstatush",
        0x340 => "mscratch",
        0x341 => "mepc",
        0x342 => "mcause",
        0x343 => "mtval",
        0x344 => "mip",
        // Memory protection
        0x3A0 => "pmpcfg0",
        0x3A1 => "pmpcfg1",
        0x3A2 => "pmpcfg2",
        0x3A3 => "pmpcfg3",
        0x3B0 => "pmpaddr0",
        0x3B1 => "pmpaddr1",
        0x3BF => "pmpaddr15",
        // Machine counters
        0xB00 => "mcycle",
        0xB02 => "minstret",
        0xB03 => "mhpmcounter3",
        0xB04 => "mhpmcounter4",
        0xB1F => "mhpmcounter31",
        0xB80 => "mcycleh",
        0xB82 => "minstreth",
        0xB83 => "mhpmcounter3h",
        0xB84 => "mhpmcounter4h",
        0xB9F => "mhpmcounter31h",
        0x320 => "mcountinhibit",
        0x323 => "mhpmevent3",
        0x324 => "mhpmevent4",
        0x33F => "mhpmevent31",
        // Debug and trigger
        0x7A0 => "tselect",
        0x7A1 => "tdata1",
        0x7A2 => "tdata2",
        0x7A3 => "tdata3",
        0x7B0 => "dcsr",
        0x7B1 => "dpc",
        0x7B2 => "dscratch0",
        0x7B3 => "dscratch1",
        _ => return None,
    };
    Some(name)
}

/// Get CSR name from address, or [`CSR_UNKNOWN`].
#[must_use]
pub const fn csr_name(csr: u16) -> &'static str {
    match csr_lookup(csr) {
        Some(name) => name,
        None => CSR_UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_csrs() {
        assert_eq!(csr_name(0x001), "fflags");
        assert_eq!(csr_name(0x100), "sstatus");
        assert_eq!(csr_name(0x180), "satp");
        assert_eq!(csr_name(0x300), "mstatus");
        assert_eq!(csr_name(0x301), "misa");
        assert_eq!(csr_name(0x305), "mtvec");
        assert_eq!(csr_name(0x341), "mepc");
        assert_eq!(csr_name(0x342), "mcause");
        assert_eq!(csr_name(0xC00), "cycle");
        assert_eq!(csr_name(0xC01), "time");
        assert_eq!(csr_name(0xC02), "instret");
        assert_eq!(csr_name(0xF14), "mhartid");
    }

    #[test]
    fn test_range_endpoints() {
        assert_eq!(csr_name(0xC1F), "hpmcounter31");
        assert_eq!(csr_name(0xC9F), "hpmcounter31h");
        assert_eq!(csr_name(0x3BF), "pmpaddr15");
        assert_eq!(csr_name(0x33F), "mhpmevent31");
        assert_eq!(csr_name(0x7B3), "dscratch1");
        assert_eq!(csr_name(0x615), "htimedeltah");
    }

    #[test]
    fn test_unlisted_csrs() {
        // Numbered ranges list only a few of their members
        assert_eq!(csr_lookup(0xC05), None);
        assert_eq!(csr_name(0xC05), CSR_UNKNOWN);
        assert_eq!(csr_name(0x3B2), CSR_UNKNOWN);
        assert_eq!(csr_name(0xB01), CSR_UNKNOWN);
        assert_eq!(csr_name(0xFFF), "(unknown)");
    }

    #[test]
    fn test_lookup_is_total() {
        let known = (0u16..0x1000).filter(|&csr| csr_lookup(csr).is_some()).count();
        assert_eq!(known, 97);
        for csr in 0u16..0x1000 {
            assert!(!csr_name(csr).is_empty());
        }
    }
}
