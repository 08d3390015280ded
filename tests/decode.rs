use pretty_assertions::assert_eq;

use rv32i_decode::decoder::Decoder;
use rv32i_decode::isa::rv32i::Rv32iDecoder;
use rv32i_decode::{decode, DecodeError, Format, Major, Mnemonic};

fn enc_r(rd: u32, rs1: u32, rs2: u32, func3: u32, func7: u32) -> u32 {
    (func7 << 25) | (rs2 << 20) | (rs1 << 15) | (func3 << 12) | (rd << 7) | 0b0110011
}

fn enc_i(op: u32, rd: u32, func3: u32, rs1: u32, imm12: u32) -> u32 {
    ((imm12 & 0xFFF) << 20) | (rs1 << 15) | (func3 << 12) | (rd << 7) | op
}

#[test]
fn addi_vector() {
    let i = decode(0x00a0_0513).unwrap();
    assert_eq!(i.major(), Major::OpImm);
    assert_eq!(i.format(), Format::I);
    assert_eq!(i.func3(), 0);
    assert_eq!(i.rd().unwrap(), 10);
    assert_eq!(i.rs1().unwrap(), 0);
    assert_eq!(i.imm().unwrap(), 10);
    assert_eq!(i.mnemonic().unwrap(), Mnemonic::Addi);
}

#[test]
fn ecall_and_ebreak() {
    let ecall = decode(0x0000_0073).unwrap();
    assert_eq!(ecall.major(), Major::System);
    assert_eq!(ecall.imm().unwrap(), 0);
    assert_eq!(ecall.mnemonic().unwrap(), Mnemonic::Ecall);

    let ebreak = decode(0x0010_0073).unwrap();
    assert_eq!(ebreak.func3(), 0);
    assert_eq!(ebreak.imm().unwrap(), 1);
    assert_eq!(ebreak.mnemonic().unwrap(), Mnemonic::Ebreak);

    let other = decode(0x0020_0073).unwrap();
    assert_eq!(
        other.mnemonic(),
        Err(DecodeError::UnrecognizedEncoding {
            table: "ECALL/EBREAK imm",
            value: 2,
            word: 0x0020_0073
        })
    );
}

#[test]
fn add_and_sub_differ_by_func7() {
    let add = decode(enc_r(3, 1, 2, 0b000, 0)).unwrap();
    assert_eq!(add.mnemonic().unwrap(), Mnemonic::Add);
    let sub = decode(enc_r(3, 1, 2, 0b000, 0b0100000)).unwrap();
    assert_eq!(sub.mnemonic().unwrap(), Mnemonic::Sub);
    let sra = decode(enc_r(3, 1, 2, 0b101, 0b0100000)).unwrap();
    assert_eq!(sra.mnemonic().unwrap(), Mnemonic::Sra);
}

#[test]
fn r_table_rejects_extension_encodings() {
    // MUL x0, x0, x0 (func7 = 1) is outside the base table
    let mul = decode(enc_r(0, 0, 0, 0b000, 0b0000001)).unwrap();
    assert_eq!(
        mul.mnemonic(),
        Err(DecodeError::UnrecognizedEncoding {
            table: "OP func7/func3",
            value: 1 << 3,
            word: 0x0200_0033
        })
    );
}

#[test]
fn r_fields_round_trip() {
    let i = decode(enc_r(31, 17, 5, 0b111, 0)).unwrap();
    assert_eq!(i.rd().unwrap(), 31);
    assert_eq!(i.rs1().unwrap(), 17);
    assert_eq!(i.rs2().unwrap(), 5);
    assert_eq!(i.func3(), 0b111);
    assert_eq!(i.func7(), 0);
    assert_eq!(i.mnemonic().unwrap(), Mnemonic::And);
}

#[test]
fn jal_reassembles_all_four_groups() {
    // every immediate bit set, rd = x0
    let word = 0xFFFF_F06F;
    let i = decode(word).unwrap();
    assert_eq!(i.format(), Format::J);
    let manual = (1 << 20) | (0xFF << 12) | (1 << 11) | (0x3FF << 1);
    assert_eq!(i.imm().unwrap(), manual);
    assert_eq!(i.imm().unwrap(), 0x1F_FFFE);
    assert_eq!(i.mnemonic().unwrap(), Mnemonic::Jal);
}

#[test]
fn jal_groups_land_in_their_slots() {
    // only bit 20 set -> imm[11]
    assert_eq!(decode(0x0010_006F).unwrap().imm().unwrap(), 1 << 11);
    // only bit 21 set -> imm[1]
    assert_eq!(decode(0x0020_006F).unwrap().imm().unwrap(), 1 << 1);
    // only bit 12 set -> imm[12]
    assert_eq!(decode(0x0000_106F).unwrap().imm().unwrap(), 1 << 12);
}

#[test]
fn branch_immediate_and_table() {
    // beq x1, x2, +16
    let beq = decode(0x0020_8863).unwrap();
    assert_eq!(beq.mnemonic().unwrap(), Mnemonic::Beq);
    assert_eq!(beq.rs1().unwrap(), 1);
    assert_eq!(beq.rs2().unwrap(), 2);
    assert_eq!(beq.imm().unwrap(), 16);

    // every immediate bit set
    let all = 0xFE00_0FE3;
    assert_eq!(decode(all).unwrap().imm().unwrap(), 0x1FFE);
    // bit 7 alone -> imm[11]
    assert_eq!(decode(0x0000_00E3).unwrap().imm().unwrap(), 1 << 11);

    let bad = decode(0x0000_2063).unwrap();
    assert_eq!(
        bad.mnemonic(),
        Err(DecodeError::UnrecognizedEncoding {
            table: "BRANCH func3",
            value: 2,
            word: 0x0000_2063
        })
    );
}

#[test]
fn store_immediate_and_width() {
    // sw x5, 8(x2): low group comes from bits [4:0], which hold the opcode tail
    let sw = decode(0x0051_2423).unwrap();
    assert_eq!(sw.mnemonic().unwrap(), Mnemonic::Sw);
    assert_eq!(sw.rs1().unwrap(), 2);
    assert_eq!(sw.rs2().unwrap(), 5);
    assert_eq!(sw.imm().unwrap(), 0b00011);

    // upper group shifted by 5, then the low five bits added
    assert_eq!(decode(0x7E00_0023).unwrap().imm().unwrap(), (0x3F << 5) + 0b00011);
    assert_eq!(decode(0x7E00_0023).unwrap().imm().unwrap(), 0x7E3);
    // bits [11:7] do not feed the immediate
    assert_eq!(decode(0x0000_0FA3).unwrap().imm().unwrap(), 0x3);
    assert_eq!(decode(0x7E00_0023).unwrap().mnemonic().unwrap(), Mnemonic::Sb);

    let bad = decode(0x0000_3023).unwrap();
    assert!(matches!(
        bad.mnemonic(),
        Err(DecodeError::UnrecognizedEncoding { table: "STORE func3", value: 3, .. })
    ));
}

#[test]
fn upper_immediates() {
    let lui = decode(0x1234_52B7).unwrap();
    assert_eq!(lui.mnemonic().unwrap(), Mnemonic::Lui);
    assert_eq!(lui.rd().unwrap(), 5);
    assert_eq!(lui.imm().unwrap(), 0x12345);

    let auipc = decode(0xFFFF_F017).unwrap();
    assert_eq!(auipc.mnemonic().unwrap(), Mnemonic::Auipc);
    assert_eq!(auipc.imm().unwrap(), 0xFFFFF);
}

#[test]
fn shift_immediates_check_upper_bits() {
    let srli = decode(0x0031_5093).unwrap();
    assert_eq!(srli.mnemonic().unwrap(), Mnemonic::Srli);
    let srai = decode(0x4031_5093).unwrap();
    assert_eq!(srai.mnemonic().unwrap(), Mnemonic::Srai);
    assert_eq!(srai.imm().unwrap(), 0x403);

    let bad = decode(0x2031_5093).unwrap();
    assert_eq!(
        bad.mnemonic(),
        Err(DecodeError::UnrecognizedEncoding {
            table: "SRLI/SRAI imm[11:5]",
            value: 0b0010000,
            word: 0x2031_5093
        })
    );
}

#[test]
fn op_imm_func3_table() {
    let cases = [
        (0b000, Mnemonic::Addi),
        (0b001, Mnemonic::Slli),
        (0b010, Mnemonic::Slti),
        (0b011, Mnemonic::Sltiu),
        (0b100, Mnemonic::Xori),
        (0b110, Mnemonic::Ori),
        (0b111, Mnemonic::Andi),
    ];
    for (f3, m) in cases {
        let i = decode(enc_i(0b0010011, 1, f3, 2, 0x7)).unwrap();
        assert_eq!(i.mnemonic().unwrap(), m, "func3 {f3:#05b}");
    }
}

#[test]
fn misc_mem_and_system() {
    assert_eq!(decode(0x0FF0_000F).unwrap().mnemonic().unwrap(), Mnemonic::Fence);
    assert_eq!(decode(0x0000_100F).unwrap().mnemonic().unwrap(), Mnemonic::FenceI);
    assert!(decode(0x0000_200F).unwrap().mnemonic().is_err());

    let csrrw = decode(0x3001_10F3).unwrap();
    assert_eq!(csrrw.mnemonic().unwrap(), Mnemonic::Csrrw);
    assert_eq!(csrrw.imm().unwrap(), 0x300);

    let sys = [
        (0b010, Mnemonic::Csrrs),
        (0b011, Mnemonic::Csrrc),
        (0b101, Mnemonic::Csrrwi),
        (0b110, Mnemonic::Csrrsi),
        (0b111, Mnemonic::Csrrci),
    ];
    for (f3, m) in sys {
        let i = decode(enc_i(0b1110011, 1, f3, 2, 0x341)).unwrap();
        assert_eq!(i.mnemonic().unwrap(), m);
    }
    assert!(matches!(
        decode(0x0000_4073).unwrap().mnemonic(),
        Err(DecodeError::UnrecognizedEncoding { table: "SYSTEM func3", value: 4, .. })
    ));
}

#[test]
fn jalr_ignores_func3() {
    let i = decode(enc_i(0b1100111, 1, 0, 5, 0x10)).unwrap();
    assert_eq!(i.mnemonic().unwrap(), Mnemonic::Jalr);
    assert_eq!(i.imm().unwrap(), 0x10);
}

#[test]
fn loads_decode_but_have_no_mnemonic() {
    // lw x1, 0(x2)
    let lw = decode(0x0001_2083).unwrap();
    assert_eq!(lw.major(), Major::Load);
    assert_eq!(lw.rd().unwrap(), 1);
    assert_eq!(lw.rs1().unwrap(), 2);
    assert!(matches!(
        lw.mnemonic(),
        Err(DecodeError::UnrecognizedEncoding { table: "I-type major", value: 0b0000011, .. })
    ));
    assert_eq!(decode(0x0000_001B).unwrap().major(), Major::OpImm32);
}

#[test]
fn unknown_opcode_is_reported() {
    assert_eq!(decode(0x0000_007F), Err(DecodeError::UnknownOpcode { bits: 0x7F }));
    // compressed encodings have low bits != 0b11
    assert_eq!(decode(0x0000_4501), Err(DecodeError::UnknownOpcode { bits: 0x01 }));
}

#[test]
fn trait_decoder_matches_free_function() {
    let dec = Rv32iDecoder::new();
    for w in [0x00a0_0513u32, 0x0000_0073, 0xFFFF_F06F, 0x0000_007F] {
        assert_eq!(dec.decode(w), decode(w));
    }
}
