// NOTE: The following code was generated by "tools/gen_tables.pl", do not edit directly
//
// Unicode Character Database 14.0.0

#![allow(clippy::unreadable_literal)]

/// The version of the Unicode Character Database the tables were built from.
pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

pub(crate) mod general_category {
    /// Values of the General_Category property.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum GeneralCategory {
        /// Uppercase_Letter (`Lu`)
        UppercaseLetter,
        /// Lowercase_Letter (`Ll`)
        LowercaseLetter,
        /// Titlecase_Letter (`Lt`)
        TitlecaseLetter,
        /// Modifier_Letter (`Lm`)
        ModifierLetter,
        /// Other_Letter (`Lo`)
        OtherLetter,
        /// Nonspacing_Mark (`Mn`)
        NonspacingMark,
        /// Spacing_Mark (`Mc`)
        SpacingMark,
        /// Enclosing_Mark (`Me`)
        EnclosingMark,
        /// Decimal_Number (`Nd`)
        DecimalNumber,
        /// Letter_Number (`Nl`)
        LetterNumber,
        /// Other_Number (`No`)
        OtherNumber,
        /// Connector_Punctuation (`Pc`)
        ConnectorPunctuation,
        /// Dash_Punctuation (`Pd`)
        DashPunctuation,
        /// Open_Punctuation (`Ps`)
        OpenPunctuation,
        /// Close_Punctuation (`Pe`)
        ClosePunctuation,
        /// Initial_Punctuation (`Pi`)
        InitialPunctuation,
        /// Final_Punctuation (`Pf`)
        FinalPunctuation,
        /// Other_Punctuation (`Po`)
        OtherPunctuation,
        /// Math_Symbol (`Sm`)
        MathSymbol,
        /// Currency_Symbol (`Sc`)
        CurrencySymbol,
        /// Modifier_Symbol (`Sk`)
        ModifierSymbol,
        /// Other_Symbol (`So`)
        OtherSymbol,
        /// Space_Separator (`Zs`)
        SpaceSeparator,
        /// Line_Separator (`Zl`)
        LineSeparator,
        /// Paragraph_Separator (`Zp`)
        ParagraphSeparator,
        /// Control (`Cc`)
        Control,
        /// Format (`Cf`)
        Format,
        /// Surrogate (`Cs`)
        Surrogate,
        /// Private_Use (`Co`)
        PrivateUse,
        /// Unassigned (`Cn`)
        Unassigned,
    }

    use self::GeneralCategory::*;

    pub(crate) const GENERAL_CATEGORY_TABLE: &[(u32, u32, GeneralCategory)] = &[
        (0x0000, 0x001F, Control),
        (0x0020, 0x0020, SpaceSeparator),
        (0x0021, 0x0023, OtherPunctuation),
        (0x0024, 0x0024, CurrencySymbol),
        (0x0025, 0x0027, OtherPunctuation),
        (0x0028, 0x0028, OpenPunctuation),
        (0x0029, 0x0029, ClosePunctuation),
        (0x002A, 0x002A, OtherPunctuation),
        (0x002B, 0x002B, MathSymbol),
        (0x002C, 0x002C, OtherPunctuation),
        (0x002D, 0x002D, DashPunctuation),
        (0x002E, 0x002F, OtherPunctuation),
        (0x0030, 0x0039, DecimalNumber),
        (0x003A, 0x003B, OtherPunctuation),
        (0x003C, 0x003E, MathSymbol),
        (0x003F, 0x0040, OtherPunctuation),
        (0x0041, 0x005A, UppercaseLetter),
        (0x005B, 0x005B, OpenPunctuation),
        (0x005C, 0x005C, OtherPunctuation),
        (0x005D, 0x005D, ClosePunctuation),
        (0x005E, 0x005E, ModifierSymbol),
        (0x005F, 0x005F, ConnectorPunctuation),
        (0x0060, 0x0060, ModifierSymbol),
        (0x0061, 0x007A, LowercaseLetter),
        (0x007B, 0x007B, OpenPunctuation),
        (0x007C, 0x007C, MathSymbol),
        (0x007D, 0x007D, ClosePunctuation),
        (0x007E, 0x007E, MathSymbol),
        (0x007F, 0x009F, Control),
        (0x00A0, 0x00A0, SpaceSeparator),
        (0x00A1, 0x00A1, OtherPunctuation),
        (0x00A2, 0x00A5, CurrencySymbol),
        (0x00A6, 0x00A6, OtherSymbol),
        (0x00A7, 0x00A7, OtherPunctuation),
        (0x00A8, 0x00A8, ModifierSymbol),
        (0x00A9, 0x00A9, OtherSymbol),
        (0x00AA, 0x00AA, OtherLetter),
        (0x00AB, 0x00AB, InitialPunctuation),
        (0x00AC, 0x00AC, MathSymbol),
        (0x00AD, 0x00AD, Format),
        (0x00AE, 0x00AE, OtherSymbol),
        (0x00AF, 0x00AF, ModifierSymbol),
        (0x00B0, 0x00B0, OtherSymbol),
        (0x00B1, 0x00B1, MathSymbol),
        (0x00B2, 0x00B3, OtherNumber),
        (0x00B4, 0x00B4, ModifierSymbol),
        (0x00B5, 0x00B5, LowercaseLetter),
        (0x00B6, 0x00B7, OtherPunctuation),
        (0x00B8, 0x00B8, ModifierSymbol),
        (0x00B9, 0x00B9, OtherNumber),
        (0x00BA, 0x00BA, OtherLetter),
        (0x00BB, 0x00BB, FinalPunctuation),
        (0x00BC, 0x00BE, OtherNumber),
        (0x00BF, 0x00BF, OtherPunctuation),
        (0x00C0, 0x00D6, UppercaseLetter),
        (0x00D7, 0x00D7, MathSymbol),
        (0x00D8, 0x00DE, UppercaseLetter),
        (0x00DF, 0x00F6, LowercaseLetter),
        (0x00F7, 0x00F7, MathSymbol),
        (0x00F8, 0x00FF, LowercaseLetter),
        (0x0100, 0x0100, UppercaseLetter),
        (0x0101, 0x0101, LowercaseLetter),
        (0x0102, 0x0102, UppercaseLetter),
        (0x0103, 0x0103, LowercaseLetter),
        (0x0104, 0x0104, UppercaseLetter),
        (0x0105, 0x0105, LowercaseLetter),
        (0x0106, 0x0106, UppercaseLetter),
        (0x0107, 0x0107, LowercaseLetter),
        (0x0108, 0x0108, UppercaseLetter),
        (0x0109, 0x0109, LowercaseLetter),
        (0x010A, 0x010A, UppercaseLetter),
        (0x010B, 0x010B, LowercaseLetter),
        (0x010C, 0x010C, UppercaseLetter),
        (0x010D, 0x010D, LowercaseLetter),
        (0x010E, 0x010E, UppercaseLetter),
        (0x010F, 0x010F, LowercaseLetter),
        (0x0110, 0x0110, UppercaseLetter),
        (0x0111, 0x0111, LowercaseLetter),
        (0x0112, 0x0112, UppercaseLetter),
        (0x0113, 0x0113, LowercaseLetter),
        (0x0114, 0x0114, UppercaseLetter),
        (0x0115, 0x0115, LowercaseLetter),
        (0x0116, 0x0116, UppercaseLetter),
        (0x0117, 0x0117, LowercaseLetter),
        (0x0118, 0x0118, UppercaseLetter),
        (0x0119, 0x0119, LowercaseLetter),
        (0x011A, 0x011A, UppercaseLetter),
        (0x011B, 0x011B, LowercaseLetter),
        (0x011C, 0x011C, UppercaseLetter),
        (0x011D, 0x011D, LowercaseLetter),
        (0x011E, 0x011E, UppercaseLetter),
        (0x011F, 0x011F, LowercaseLetter),
        (0x0120, 0x0120, UppercaseLetter),
        (0x0121, 0x0121, LowercaseLetter),
        (0x0122, 0x0122, UppercaseLetter),
        (0x0123, 0x0123, LowercaseLetter),
        (0x0124, 0x0124, UppercaseLetter),
        (0x0125, 0x0125, LowercaseLetter),
        (0x0126, 0x0126, UppercaseLetter),
        (0x0127, 0x0127, LowercaseLetter),
        (0x0128, 0x0128, UppercaseLetter),
        (0x0129, 0x0129, LowercaseLetter),
        (0x012A, 0x012A, UppercaseLetter),
        (0x012B, 0x012B, LowercaseLetter),
        (0x012C, 0x012C, UppercaseLetter),
        (0x012D, 0x012D, LowercaseLetter),
        (0x012E, 0x012E, UppercaseLetter),
        (0x012F, 0x012F, LowercaseLetter),
        (0x0130, 0x0130, UppercaseLetter),
        (0x0131, 0x0131, LowercaseLetter),
        (0x0132, 0x0132, UppercaseLetter),
        (0x0133, 0x0133, LowercaseLetter),
        (0x0134, 0x0134, UppercaseLetter),
        (0x0135, 0x0135, LowercaseLetter),
        (0x0136, 0x0136, UppercaseLetter),
        (0x0137, 0x0138, LowercaseLetter),
        (0x0139, 0x0139, UppercaseLetter),
        (0x013A, 0x013A, LowercaseLetter),
        (0x013B, 0x013B, UppercaseLetter),
        (0x013C, 0x013C, LowercaseLetter),
        (0x013D, 0x013D, UppercaseLetter),
        (0x013E, 0x013E, LowercaseLetter),
        (0x013F, 0x013F, UppercaseLetter),
        (0x0140, 0x0140, LowercaseLetter),
        (0x0141, 0x0141, UppercaseLetter),
        (0x0142, 0x0142, LowercaseLetter),
        (0x0143, 0x0143, UppercaseLetter),
        (0x0144, 0x0144, LowercaseLetter),
        (0x0145, 0x0145, UppercaseLetter),
        (0x0146, 0x0146, LowercaseLetter),
        (0x0147, 0x0147, UppercaseLetter),
        (0x0148, 0x0149, LowercaseLetter),
        (0x014A, 0x014A, UppercaseLetter),
        (0x014B, 0x014B, LowercaseLetter),
        (0x014C, 0x014C, UppercaseLetter),
        (0x014D, 0x014D, LowercaseLetter),
        (0x014E, 0x014E, UppercaseLetter),
        (0x014F, 0x014F, LowercaseLetter),
        (0x0150, 0x0150, UppercaseLetter),
        (0x0151, 0x0151, LowercaseLetter),
        (0x0152, 0x0152, UppercaseLetter),
        (0x0153, 0x0153, LowercaseLetter),
        (0x0154, 0x0154, UppercaseLetter),
        (0x0155, 0x0155, LowercaseLetter),
        (0x0156, 0x0156, UppercaseLetter),
        (0x0157, 0x0157, LowercaseLetter),
        (0x0158, 0x0158, UppercaseLetter),
        (0x0159, 0x0159, LowercaseLetter),
        (0x015A, 0x015A, UppercaseLetter),
        (0x015B, 0x015B, LowercaseLetter),
        (0x015C, 0x015C, UppercaseLetter),
        (0x015D, 0x015D, LowercaseLetter),
        (0x015E, 0x015E, UppercaseLetter),
        (0x015F, 0x015F, LowercaseLetter),
        (0x0160, 0x0160, UppercaseLetter),
        (0x0161, 0x0161, LowercaseLetter),
        (0x0162, 0x0162, UppercaseLetter),
        (0x0163, 0x0163, LowercaseLetter),
        (0x0164, 0x0164, UppercaseLetter),
        (0x0165, 0x0165, LowercaseLetter),
        (0x0166, 0x0166, UppercaseLetter),
        (0x0167, 0x0167, LowercaseLetter),
        (0x0168, 0x0168, UppercaseLetter),
        (0x0169, 0x0169, LowercaseLetter),
        (0x016A, 0x016A, UppercaseLetter),
        (0x016B, 0x016B, LowercaseLetter),
        (0x016C, 0x016C, UppercaseLetter),
        (0x016D, 0x016D, LowercaseLetter),
        (0x016E, 0x016E, UppercaseLetter),
        (0x016F, 0x016F, LowercaseLetter),
        (0x0170, 0x0170, UppercaseLetter),
        (0x0171, 0x0171, LowercaseLetter),
        (0x0172, 0x0172, UppercaseLetter),
        (0x0173, 0x0173, LowercaseLetter),
        (0x0174, 0x0174, UppercaseLetter),
        (0x0175, 0x0175, LowercaseLetter),
        (0x0176, 0x0176, UppercaseLetter),
        (0x0177, 0x0177, LowercaseLetter),
        (0x0178, 0x0179, UppercaseLetter),
        (0x017A, 0x017A, LowercaseLetter),
        (0x017B, 0x017B, UppercaseLetter),
        (0x017C, 0x017C, LowercaseLetter),
        (0x017D, 0x017D, UppercaseLetter),
        (0x017E, 0x0180, LowercaseLetter),
        (0x0181, 0x0182, UppercaseLetter),
        (0x0183, 0x0183, LowercaseLetter),
        (0x0184, 0x0184, UppercaseLetter),
        (0x0185, 0x0185, LowercaseLetter),
        (0x0186, 0x0187, UppercaseLetter),
        (0x0188, 0x0188, LowercaseLetter),
        (0x0189, 0x018B, UppercaseLetter),
        (0x018C, 0x018D, LowercaseLetter),
        (0x018E, 0x0191, UppercaseLetter),
        (0x0192, 0x0192, LowercaseLetter),
        (0x0193, 0x0194, UppercaseLetter),
        (0x0195, 0x0195, LowercaseLetter),
        (0x0196, 0x0198, UppercaseLetter),
        (0x0199, 0x019B, LowercaseLetter),
        (0x019C, 0x019D, UppercaseLetter),
        (0x019E, 0x019E, LowercaseLetter),
        (0x019F, 0x01A0, UppercaseLetter),
        (0x01A1, 0x01A1, LowercaseLetter),
        (0x01A2, 0x01A2, UppercaseLetter),
        (0x01A3, 0x01A3, LowercaseLetter),
        (0x01A4, 0x01A4, UppercaseLetter),
        (0x01A5, 0x01A5, LowercaseLetter),
        (0x01A6, 0x01A7, UppercaseLetter),
        (0x01A8, 0x01A8, LowercaseLetter),
        (0x01A9, 0x01A9, UppercaseLetter),
        (0x01AA, 0x01AB, LowercaseLetter),
        (0x01AC, 0x01AC, UppercaseLetter),
        (0x01AD, 0x01AD, LowercaseLetter),
        (0x01AE, 0x01AF, UppercaseLetter),
        (0x01B0, 0x01B0, LowercaseLetter),
        (0x01B1, 0x01B3, UppercaseLetter),
        (0x01B4, 0x01B4, LowercaseLetter),
        (0x01B5, 0x01B5, UppercaseLetter),
        (0x01B6, 0x01B6, LowercaseLetter),
        (0x01B7, 0x01B8, UppercaseLetter),
        (0x01B9, 0x01BA, LowercaseLetter),
        (0x01BB, 0x01BB, OtherLetter),
        (0x01BC, 0x01BC, UppercaseLetter),
        (0x01BD, 0x01BF, LowercaseLetter),
        (0x01C0, 0x01C3, OtherLetter),
        (0x01C4, 0x01C4, UppercaseLetter),
        (0x01C5, 0x01C5, TitlecaseLetter),
        (0x01C6, 0x01C6, LowercaseLetter),
        (0x01C7, 0x01C7, UppercaseLetter),
        (0x01C8, 0x01C8, TitlecaseLetter),
        (0x01C9, 0x01C9, LowercaseLetter),
        (0x01CA, 0x01CA, UppercaseLetter),
        (0x01CB, 0x01CB, TitlecaseLetter),
        (0x01CC, 0x01CC, LowercaseLetter),
        (0x01CD, 0x01CD, UppercaseLetter),
        (0x01CE, 0x01CE, LowercaseLetter),
        (0x01CF, 0x01CF, UppercaseLetter),
        (0x01D0, 0x01D0, LowercaseLetter),
        (0x01D1, 0x01D1, UppercaseLetter),
        (0x01D2, 0x01D2, LowercaseLetter),
        (0x01D3, 0x01D3, UppercaseLetter),
        (0x01D4, 0x01D4, LowercaseLetter),
        (0x01D5, 0x01D5, UppercaseLetter),
        (0x01D6, 0x01D6, LowercaseLetter),
        (0x01D7, 0x01D7, UppercaseLetter),
        (0x01D8, 0x01D8, LowercaseLetter),
        (0x01D9, 0x01D9, UppercaseLetter),
        (0x01DA, 0x01DA, LowercaseLetter),
        (0x01DB, 0x01DB, UppercaseLetter),
        (0x01DC, 0x01DD, LowercaseLetter),
        (0x01DE, 0x01DE, UppercaseLetter),
        (0x01DF, 0x01DF, LowercaseLetter),
        (0x01E0, 0x01E0, UppercaseLetter),
        (0x01E1, 0x01E1, LowercaseLetter),
        (0x01E2, 0x01E2, UppercaseLetter),
        (0x01E3, 0x01E3, LowercaseLetter),
        (0x01E4, 0x01E4, UppercaseLetter),
        (0x01E5, 0x01E5, LowercaseLetter),
        (0x01E6, 0x01E6, UppercaseLetter),
        (0x01E7, 0x01E7, LowercaseLetter),
        (0x01E8, 0x01E8, UppercaseLetter),
        (0x01E9, 0x01E9, LowercaseLetter),
        (0x01EA, 0x01EA, UppercaseLetter),
        (0x01EB, 0x01EB, LowercaseLetter),
        (0x01EC, 0x01EC, UppercaseLetter),
        (0x01ED, 0x01ED, LowercaseLetter),
        (0x01EE, 0x01EE, UppercaseLetter),
        (0x01EF, 0x01F0, LowercaseLetter),
        (0x01F1, 0x01F1, UppercaseLetter),
        (0x01F2, 0x01F2, TitlecaseLetter),
        (0x01F3, 0x01F3, LowercaseLetter),
        (0x01F4, 0x01F4, UppercaseLetter),
        (0x01F5, 0x01F5, LowercaseLetter),
        (0x01F6, 0x01F8, UppercaseLetter),
        (0x01F9, 0x01F9, LowercaseLetter),
        (0x01FA, 0x01FA, UppercaseLetter),
        (0x01FB, 0x01FB, LowercaseLetter),
        (0x01FC, 0x01FC, UppercaseLetter),
        (0x01FD, 0x01FD, LowercaseLetter),
        (0x01FE, 0x01FE, UppercaseLetter),
        (0x01FF, 0x01FF, LowercaseLetter),
        (0x0200, 0x0200, UppercaseLetter),
        (0x0201, 0x0201, LowercaseLetter),
        (0x0202, 0x0202, UppercaseLetter),
        (0x0203, 0x0203, LowercaseLetter),
        (0x0204, 0x0204, UppercaseLetter),
        (0x0205, 0x0205, LowercaseLetter),
        (0x0206, 0x0206, UppercaseLetter),
        (0x0207, 0x0207, LowercaseLetter),
        (0x0208, 0x0208, UppercaseLetter),
        (0x0209, 0x0209, LowercaseLetter),
        (0x020A, 0x020A, UppercaseLetter),
        (0x020B, 0x020B, LowercaseLetter),
        (0x020C, 0x020C, UppercaseLetter),
        (0x020D, 0x020D, LowercaseLetter),
        (0x020E, 0x020E, UppercaseLetter),
        (0x020F, 0x020F, LowercaseLetter),
        (0x0210, 0x0210, UppercaseLetter),
        (0x0211, 0x0211, LowercaseLetter),
        (0x0212, 0x0212, UppercaseLetter),
        (0x0213, 0x0213, LowercaseLetter),
        (0x0214, 0x0214, UppercaseLetter),
        (0x0215, 0x0215, LowercaseLetter),
        (0x0216, 0x0216, UppercaseLetter),
        (0x0217, 0x0217, LowercaseLetter),
        (0x0218, 0x0218, UppercaseLetter),
        (0x0219, 0x0219, LowercaseLetter),
        (0x021A, 0x021A, UppercaseLetter),
        (0x021B, 0x021B, LowercaseLetter),
        (0x021C, 0x021C, UppercaseLetter),
        (0x021D, 0x021D, LowercaseLetter),
        (0x021E, 0x021E, UppercaseLetter),
        (0x021F, 0x021F, LowercaseLetter),
        (0x0220, 0x0220, UppercaseLetter),
        (0x0221, 0x0221, LowercaseLetter),
        (0x0222, 0x0222, UppercaseLetter),
        (0x0223, 0x0223, LowercaseLetter),
        (0x0224, 0x0224, UppercaseLetter),
        (0x0225, 0x0225, LowercaseLetter),
        (0x0226, 0x0226, UppercaseLetter),
        (0x0227, 0x0227, LowercaseLetter),
        (0x0228, 0x0228, UppercaseLetter),
        (0x0229, 0x0229, LowercaseLetter),
        (0x022A, 0x022A, UppercaseLetter),
        (0x022B, 0x022B, LowercaseLetter),
        (0x022C, 0x022C, UppercaseLetter),
        (0x022D, 0x022D, LowercaseLetter),
        (0x022E, 0x022E, UppercaseLetter),
        (0x022F, 0x022F, LowercaseLetter),
        (0x0230, 0x0230, UppercaseLetter),
        (0x0231, 0x0231, LowercaseLetter),
        (0x0232, 0x0232, UppercaseLetter),
        (0x0233, 0x0239, LowercaseLetter),
        (0x023A, 0x023B, UppercaseLetter),
        (0x023C, 0x023C, LowercaseLetter),
        (0x023D, 0x023E, UppercaseLetter),
        (0x023F, 0x0240, LowercaseLetter),
        (0x0241, 0x0241, UppercaseLetter),
        (0x0242, 0x0242, LowercaseLetter),
        (0x0243, 0x0246, UppercaseLetter),
        (0x0247, 0x0247, LowercaseLetter),
        (0x0248, 0x0248, UppercaseLetter),
        (0x0249, 0x0249, LowercaseLetter),
        (0x024A, 0x024A, UppercaseLetter),
        (0x024B, 0x024B, LowercaseLetter),
        (0x024C, 0x024C, UppercaseLetter),
        (0x024D, 0x024D, LowercaseLetter),
        (0x024E, 0x024E, UppercaseLetter),
        (0x024F, 0x0293, LowercaseLetter),
        (0x0294, 0x0294, OtherLetter),
        (0x0295, 0x02AF, LowercaseLetter),
        (0x02B0, 0x02C1, ModifierLetter),
        (0x02C2, 0x02C5, ModifierSymbol),
        (0x02C6, 0x02D1, ModifierLetter),
        (0x02D2, 0x02DF, ModifierSymbol),
        (0x02E0, 0x02E4, ModifierLetter),
        (0x02E5, 0x02EB, ModifierSymbol),
        (0x02EC, 0x02EC, ModifierLetter),
        (0x02ED, 0x02ED, ModifierSymbol),
        (0x02EE, 0x02EE, ModifierLetter),
        (0x02EF, 0x02FF, ModifierSymbol),
        (0x0300, 0x036F, NonspacingMark),
        (0x0370, 0x0370, UppercaseLetter),
        (0x0371, 0x0371, LowercaseLetter),
        (0x0372, 0x0372, UppercaseLetter),
        (0x0373, 0x0373, LowercaseLetter),
        (0x0374, 0x0374, ModifierLetter),
        (0x0375, 0x0375, ModifierSymbol),
        (0x0376, 0x0376, UppercaseLetter),
        (0x0377, 0x0377, LowercaseLetter),
        (0x037A, 0x037A, ModifierLetter),
        (0x037B, 0x037D, LowercaseLetter),
        (0x037E, 0x037E, OtherPunctuation),
        (0x037F, 0x037F, UppercaseLetter),
        (0x0384, 0x0385, ModifierSymbol),
        (0x0386, 0x0386, UppercaseLetter),
        (0x0387, 0x0387, OtherPunctuation),
        (0x0388, 0x038A, UppercaseLetter),
        (0x038C, 0x038C, UppercaseLetter),
        (0x038E, 0x038F, UppercaseLetter),
        (0x0390, 0x0390, LowercaseLetter),
        (0x0391, 0x03A1, UppercaseLetter),
        (0x03A3, 0x03AB, UppercaseLetter),
        (0x03AC, 0x03CE, LowercaseLetter),
        (0x03CF, 0x03CF, UppercaseLetter),
        (0x03D0, 0x03D1, LowercaseLetter),
        (0x03D2, 0x03D4, UppercaseLetter),
        (0x03D5, 0x03D7, LowercaseLetter),
        (0x03D8, 0x03D8, UppercaseLetter),
        (0x03D9, 0x03D9, LowercaseLetter),
        (0x03DA, 0x03DA, UppercaseLetter),
        (0x03DB, 0x03DB, LowercaseLetter),
        (0x03DC, 0x03DC, UppercaseLetter),
        (0x03DD, 0x03DD, LowercaseLetter),
        (0x03DE, 0x03DE, UppercaseLetter),
        (0x03DF, 0x03DF, LowercaseLetter),
        (0x03E0, 0x03E0, UppercaseLetter),
        (0x03E1, 0x03E1, LowercaseLetter),
        (0x03E2, 0x03E2, UppercaseLetter),
        (0x03E3, 0x03E3, LowercaseLetter),
        (0x03E4, 0x03E4, UppercaseLetter),
        (0x03E5, 0x03E5, LowercaseLetter),
        (0x03E6, 0x03E6, UppercaseLetter),
        (0x03E7, 0x03E7, LowercaseLetter),
        (0x03E8, 0x03E8, UppercaseLetter),
        (0x03E9, 0x03E9, LowercaseLetter),
        (0x03EA, 0x03EA, UppercaseLetter),
        (0x03EB, 0x03EB, LowercaseLetter),
        (0x03EC, 0x03EC, UppercaseLetter),
        (0x03ED, 0x03ED, LowercaseLetter),
        (0x03EE, 0x03EE, UppercaseLetter),
        (0x03EF, 0x03F3, LowercaseLetter),
        (0x03F4, 0x03F4, UppercaseLetter),
        (0x03F5, 0x03F5, LowercaseLetter),
        (0x03F6, 0x03F6, MathSymbol),
        (0x03F7, 0x03F7, UppercaseLetter),
        (0x03F8, 0x03F8, LowercaseLetter),
        (0x03F9, 0x03FA, UppercaseLetter),
        (0x03FB, 0x03FC, LowercaseLetter),
        (0x03FD, 0x042F, UppercaseLetter),
        (0x0430, 0x045F, LowercaseLetter),
        (0x0460, 0x0460, UppercaseLetter),
        (0x0461, 0x0461, LowercaseLetter),
        (0x0462, 0x0462, UppercaseLetter),
        (0x0463, 0x0463, LowercaseLetter),
        (0x0464, 0x0464, UppercaseLetter),
        (0x0465, 0x0465, LowercaseLetter),
        (0x0466, 0x0466, UppercaseLetter),
        (0x0467, 0x0467, LowercaseLetter),
        (0x0468, 0x0468, UppercaseLetter),
        (0x0469, 0x0469, LowercaseLetter),
        (0x046A, 0x046A, UppercaseLetter),
        (0x046B, 0x046B, LowercaseLetter),
        (0x046C, 0x046C, UppercaseLetter),
        (0x046D, 0x046D, LowercaseLetter),
        (0x046E, 0x046E, UppercaseLetter),
        (0x046F, 0x046F, LowercaseLetter),
        (0x0470, 0x0470, UppercaseLetter),
        (0x0471, 0x0471, LowercaseLetter),
        (0x0472, 0x0472, UppercaseLetter),
        (0x0473, 0x0473, LowercaseLetter),
        (0x0474, 0x0474, UppercaseLetter),
        (0x0475, 0x0475, LowercaseLetter),
        (0x0476, 0x0476, UppercaseLetter),
        (0x0477, 0x0477, LowercaseLetter),
        (0x0478, 0x0478, UppercaseLetter),
        (0x0479, 0x0479, LowercaseLetter),
        (0x047A, 0x047A, UppercaseLetter),
        (0x047B, 0x047B, LowercaseLetter),
        (0x047C, 0x047C, UppercaseLetter),
        (0x047D, 0x047D, LowercaseLetter),
        (0x047E, 0x047E, UppercaseLetter),
        (0x047F, 0x047F, LowercaseLetter),
        (0x0480, 0x0480, UppercaseLetter),
        (0x0481, 0x0481, LowercaseLetter),
        (0x0482, 0x0482, OtherSymbol),
        (0x0483, 0x0487, NonspacingMark),
        (0x0488, 0x0489, EnclosingMark),
        (0x048A, 0x048A, UppercaseLetter),
        (0x048B, 0x048B, LowercaseLetter),
        (0x048C, 0x048C, UppercaseLetter),
        (0x048D, 0x048D, LowercaseLetter),
        (0x048E, 0x048E, UppercaseLetter),
        (0x048F, 0x048F, LowercaseLetter),
        (0x0490, 0x0490, UppercaseLetter),
        (0x0491, 0x0491, LowercaseLetter),
        (0x0492, 0x0492, UppercaseLetter),
        (0x0493, 0x0493, LowercaseLetter),
        (0x0494, 0x0494, UppercaseLetter),
        (0x0495, 0x0495, LowercaseLetter),
        (0x0496, 0x0496, UppercaseLetter),
        (0x0497, 0x0497, LowercaseLetter),
        (0x0498, 0x0498, UppercaseLetter),
        (0x0499, 0x0499, LowercaseLetter),
        (0x049A, 0x049A, UppercaseLetter),
        (0x049B, 0x049B, LowercaseLetter),
        (0x049C, 0x049C, UppercaseLetter),
        (0x049D, 0x049D, LowercaseLetter),
        (0x049E, 0x049E, UppercaseLetter),
        (0x049F, 0x049F, LowercaseLetter),
        (0x04A0, 0x04A0, UppercaseLetter),
        (0x04A1, 0x04A1, LowercaseLetter),
        (0x04A2, 0x04A2, UppercaseLetter),
        (0x04A3, 0x04A3, LowercaseLetter),
        (0x04A4, 0x04A4, UppercaseLetter),
        (0x04A5, 0x04A5, LowercaseLetter),
        (0x04A6, 0x04A6, UppercaseLetter),
        (0x04A7, 0x04A7, LowercaseLetter),
        (0x04A8, 0x04A8, UppercaseLetter),
        (0x04A9, 0x04A9, LowercaseLetter),
        (0x04AA, 0x04AA, UppercaseLetter),
        (0x04AB, 0x04AB, LowercaseLetter),
        (0x04AC, 0x04AC, UppercaseLetter),
        (0x04AD, 0x04AD, LowercaseLetter),
        (0x04AE, 0x04AE, UppercaseLetter),
        (0x04AF, 0x04AF, LowercaseLetter),
        (0x04B0, 0x04B0, UppercaseLetter),
        (0x04B1, 0x04B1, LowercaseLetter),
        (0x04B2, 0x04B2, UppercaseLetter),
        (0x04B3, 0x04B3, LowercaseLetter),
        (0x04B4, 0x04B4, UppercaseLetter),
        (0x04B5, 0x04B5, LowercaseLetter),
        (0x04B6, 0x04B6, UppercaseLetter),
        (0x04B7, 0x04B7, LowercaseLetter),
        (0x04B8, 0x04B8, UppercaseLetter),
        (0x04B9, 0x04B9, LowercaseLetter),
        (0x04BA, 0x04BA, UppercaseLetter),
        (0x04BB, 0x04BB, LowercaseLetter),
        (0x04BC, 0x04BC, UppercaseLetter),
        (0x04BD, 0x04BD, LowercaseLetter),
        (0x04BE, 0x04BE, UppercaseLetter),
        (0x04BF, 0x04BF, LowercaseLetter),
        (0x04C0, 0x04C1, UppercaseLetter),
        (0x04C2, 0x04C2, LowercaseLetter),
        (0x04C3, 0x04C3, UppercaseLetter),
        (0x04C4, 0x04C4, LowercaseLetter),
        (0x04C5, 0x04C5, UppercaseLetter),
        (0x04C6, 0x04C6, LowercaseLetter),
        (0x04C7, 0x04C7, UppercaseLetter),
        (0x04C8, 0x04C8, LowercaseLetter),
        (0x04C9, 0x04C9, UppercaseLetter),
        (0x04CA, 0x04CA, LowercaseLetter),
        (0x04CB, 0x04CB, UppercaseLetter),
        (0x04CC, 0x04CC, LowercaseLetter),
        (0x04CD, 0x04CD, UppercaseLetter),
        (0x04CE, 0x04CF, LowercaseLetter),
        (0x04D0, 0x04D0, UppercaseLetter),
        (0x04D1, 0x04D1, LowercaseLetter),
        (0x04D2, 0x04D2, UppercaseLetter),
        (0x04D3, 0x04D3, LowercaseLetter),
        (0x04D4, 0x04D4, UppercaseLetter),
        (0x04D5, 0x04D5, LowercaseLetter),
        (0x04D6, 0x04D6, UppercaseLetter),
        (0x04D7, 0x04D7, LowercaseLetter),
        (0x04D8, 0x04D8, UppercaseLetter),
        (0x04D9, 0x04D9, LowercaseLetter),
        (0x04DA, 0x04DA, UppercaseLetter),
        (0x04DB, 0x04DB, LowercaseLetter),
        (0x04DC, 0x04DC, UppercaseLetter),
        (0x04DD, 0x04DD, LowercaseLetter),
        (0x04DE, 0x04DE, UppercaseLetter),
        (0x04DF, 0x04DF, LowercaseLetter),
        (0x04E0, 0x04E0, UppercaseLetter),
        (0x04E1, 0x04E1, LowercaseLetter),
        (0x04E2, 0x04E2, UppercaseLetter),
        (0x04E3, 0x04E3, LowercaseLetter),
        (0x04E4, 0x04E4, UppercaseLetter),
        (0x04E5, 0x04E5, LowercaseLetter),
        (0x04E6, 0x04E6, UppercaseLetter),
        (0x04E7, 0x04E7, LowercaseLetter),
        (0x04E8, 0x04E8, UppercaseLetter),
        (0x04E9, 0x04E9, LowercaseLetter),
        (0x04EA, 0x04EA, UppercaseLetter),
        (0x04EB, 0x04EB, LowercaseLetter),
        (0x04EC, 0x04EC, UppercaseLetter),
        (0x04ED, 0x04ED, LowercaseLetter),
        (0x04EE, 0x04EE, UppercaseLetter),
        (0x04EF, 0x04EF, LowercaseLetter),
        (0x04F0, 0x04F0, UppercaseLetter),
        (0x04F1, 0x04F1, LowercaseLetter),
        (0x04F2, 0x04F2, UppercaseLetter),
        (0x04F3, 0x04F3, LowercaseLetter),
        (0x04F4, 0x04F4, UppercaseLetter),
        (0x04F5, 0x04F5, LowercaseLetter),
        (0x04F6, 0x04F6, UppercaseLetter),
        (0x04F7, 0x04F7, LowercaseLetter),
        (0x04F8, 0x04F8, UppercaseLetter),
        (0x04F9, 0x04F9, LowercaseLetter),
        (0x04FA, 0x04FA, UppercaseLetter),
        (0x04FB, 0x04FB, LowercaseLetter),
        (0x04FC, 0x04FC, UppercaseLetter),
        (0x04FD, 0x04FD, LowercaseLetter),
        (0x04FE, 0x04FE, UppercaseLetter),
        (0x04FF, 0x04FF, LowercaseLetter),
        (0x0500, 0x0500, UppercaseLetter),
        (0x0501, 0x0501, LowercaseLetter),
        (0x0502, 0x0502, UppercaseLetter),
        (0x0503, 0x0503, LowercaseLetter),
        (0x0504, 0x0504, UppercaseLetter),
        (0x0505, 0x0505, LowercaseLetter),
        (0x0506, 0x0506, UppercaseLetter),
        (0x0507, 0x0507, LowercaseLetter),
        (0x0508, 0x0508, UppercaseLetter),
        (0x0509, 0x0509, LowercaseLetter),
        (0x050A, 0x050A, UppercaseLetter),
        (0x050B, 0x050B, LowercaseLetter),
        (0x050C, 0x050C, UppercaseLetter),
        (0x050D, 0x050D, LowercaseLetter),
        (0x050E, 0x050E, UppercaseLetter),
        (0x050F, 0x050F, LowercaseLetter),
        (0x0510, 0x0510, UppercaseLetter),
        (0x0511, 0x0511, LowercaseLetter),
        (0x0512, 0x0512, UppercaseLetter),
        (0x0513, 0x0513, LowercaseLetter),
        (0x0514, 0x0514, UppercaseLetter),
        (0x0515, 0x0515, LowercaseLetter),
        (0x0516, 0x0516, UppercaseLetter),
        (0x0517, 0x0517, LowercaseLetter),
        (0x0518, 0x0518, UppercaseLetter),
        (0x0519, 0x0519, LowercaseLetter),
        (0x051A, 0x051A, UppercaseLetter),
        (0x051B, 0x051B, LowercaseLetter),
        (0x051C, 0x051C, UppercaseLetter),
        (0x051D, 0x051D, LowercaseLetter),
        (0x051E, 0x051E, UppercaseLetter),
        (0x051F, 0x051F, LowercaseLetter),
        (0x0520, 0x0520, UppercaseLetter),
        (0x0521, 0x0521, LowercaseLetter),
        (0x0522, 0x0522, UppercaseLetter),
        (0x0523, 0x0523, LowercaseLetter),
        (0x0524, 0x0524, UppercaseLetter),
        (0x0525, 0x0525, LowercaseLetter),
        (0x0526, 0x0526, UppercaseLetter),
        (0x0527, 0x0527, LowercaseLetter),
        (0x0528, 0x0528, UppercaseLetter),
        (0x0529, 0x0529, LowercaseLetter),
        (0x052A, 0x052A, UppercaseLetter),
        (0x052B, 0x052B, LowercaseLetter),
        (0x052C, 0x052C, UppercaseLetter),
        (0x052D, 0x052D, LowercaseLetter),
        (0x052E, 0x052E, UppercaseLetter),
        (0x052F, 0x052F, LowercaseLetter),
        (0x0531, 0x0556, UppercaseLetter),
        (0x0559, 0x0559, ModifierLetter),
        (0x055A, 0x055F, OtherPunctuation),
        (0x0560, 0x0588, LowercaseLetter),
        (0x0589, 0x0589, OtherPunctuation),
        (0x058A, 0x058A, DashPunctuation),
        (0x058D, 0x058E, OtherSymbol),
        (0x058F, 0x058F, CurrencySymbol),
        (0x0591, 0x05BD, NonspacingMark),
        (0x05BE, 0x05BE, DashPunctuation),
        (0x05BF, 0x05BF, NonspacingMark),
        (0x05C0, 0x05C0, OtherPunctuation),
        (0x05C1, 0x05C2, NonspacingMark),
        (0x05C3, 0x05C3, OtherPunctuation),
        (0x05C4, 0x05C5, NonspacingMark),
        (0x05C6, 0x05C6, OtherPunctuation),
        (0x05C7, 0x05C7, NonspacingMark),
        (0x05D0, 0x05EA, OtherLetter),
        (0x05EF, 0x05F2, OtherLetter),
        (0x05F3, 0x05F4, OtherPunctuation),
        (0x0600, 0x0605, Format),
        (0x0606, 0x0608, MathSymbol),
        (0x0609, 0x060A, OtherPunctuation),
        (0x060B, 0x060B, CurrencySymbol),
        (0x060C, 0x060D, OtherPunctuation),
        (0x060E, 0x060F, OtherSymbol),
        (0x0610, 0x061A, NonspacingMark),
        (0x061B, 0x061B, OtherPunctuation),
        (0x061C, 0x061C, Format),
        (0x061D, 0x061F, OtherPunctuation),
        (0x0620, 0x063F, OtherLetter),
        (0x0640, 0x0640, ModifierLetter),
        (0x0641, 0x064A, OtherLetter),
        (0x064B, 0x065F, NonspacingMark),
        (0x0660, 0x0669, DecimalNumber),
        (0x066A, 0x066D, OtherPunctuation),
        (0x066E, 0x066F, OtherLetter),
        (0x0670, 0x0670, NonspacingMark),
        (0x0671, 0x06D3, OtherLetter),
        (0x06D4, 0x06D4, OtherPunctuation),
        (0x06D5, 0x06D5, OtherLetter),
        (0x06D6, 0x06DC, NonspacingMark),
        (0x06DD, 0x06DD, Format),
        (0x06DE, 0x06DE, OtherSymbol),
        (0x06DF, 0x06E4, NonspacingMark),
        (0x06E5, 0x06E6, ModifierLetter),
        (0x06E7, 0x06E8, NonspacingMark),
        (0x06E9, 0x06E9, OtherSymbol),
        (0x06EA, 0x06ED, NonspacingMark),
        (0x06EE, 0x06EF, OtherLetter),
        (0x06F0, 0x06F9, DecimalNumber),
        (0x06FA, 0x06FC, OtherLetter),
        (0x06FD, 0x06FE, OtherSymbol),
        (0x06FF, 0x06FF, OtherLetter),
        (0x0700, 0x070D, OtherPunctuation),
        (0x070F, 0x070F, Format),
        (0x0710, 0x0710, OtherLetter),
        (0x0711, 0x0711, NonspacingMark),
        (0x0712, 0x072F, OtherLetter),
        (0x0730, 0x074A, NonspacingMark),
        (0x074D, 0x07A5, OtherLetter),
        (0x07A6, 0x07B0, NonspacingMark),
        (0x07B1, 0x07B1, OtherLetter),
        (0x07C0, 0x07C9, DecimalNumber),
        (0x07CA, 0x07EA, OtherLetter),
        (0x07EB, 0x07F3, NonspacingMark),
        (0x07F4, 0x07F5, ModifierLetter),
        (0x07F6, 0x07F6, OtherSymbol),
        (0x07F7, 0x07F9, OtherPunctuation),
        (0x07FA, 0x07FA, ModifierLetter),
        (0x07FD, 0x07FD, NonspacingMark),
        (0x07FE, 0x07FF, CurrencySymbol),
        (0x0800, 0x0815, OtherLetter),
        (0x0816, 0x0819, NonspacingMark),
        (0x081A, 0x081A, ModifierLetter),
        (0x081B, 0x0823, NonspacingMark),
        (0x0824, 0x0824, ModifierLetter),
        (0x0825, 0x0827, NonspacingMark),
        (0x0828, 0x0828, ModifierLetter),
        (0x0829, 0x082D, NonspacingMark),
        (0x0830, 0x083E, OtherPunctuation),
        (0x0840, 0x0858, OtherLetter),
        (0x0859, 0x085B, NonspacingMark),
        (0x085E, 0x085E, OtherPunctuation),
        (0x0860, 0x086A, OtherLetter),
        (0x0870, 0x0887, OtherLetter),
        (0x0888, 0x0888, ModifierSymbol),
        (0x0889, 0x088E, OtherLetter),
        (0x0890, 0x0891, Format),
        (0x0898, 0x089F, NonspacingMark),
        (0x08A0, 0x08C8, OtherLetter),
        (0x08C9, 0x08C9, ModifierLetter),
        (0x08CA, 0x08E1, NonspacingMark),
        (0x08E2, 0x08E2, Format),
        (0x08E3, 0x0902, NonspacingMark),
        (0x0903, 0x0903, SpacingMark),
        (0x0904, 0x0939, OtherLetter),
        (0x093A, 0x093A, NonspacingMark),
        (0x093B, 0x093B, SpacingMark),
        (0x093C, 0x093C, NonspacingMark),
        (0x093D, 0x093D, OtherLetter),
        (0x093E, 0x0940, SpacingMark),
        (0x0941, 0x0948, NonspacingMark),
        (0x0949, 0x094C, SpacingMark),
        (0x094D, 0x094D, NonspacingMark),
        (0x094E, 0x094F, SpacingMark),
        (0x0950, 0x0950, OtherLetter),
        (0x0951, 0x0957, NonspacingMark),
        (0x0958, 0x0961, OtherLetter),
        (0x0962, 0x0963, NonspacingMark),
        (0x0964, 0x0965, OtherPunctuation),
        (0x0966, 0x096F, DecimalNumber),
        (0x0970, 0x0970, OtherPunctuation),
        (0x0971, 0x0971, ModifierLetter),
        (0x0972, 0x0980, OtherLetter),
        (0x0981, 0x0981, NonspacingMark),
        (0x0982, 0x0983, SpacingMark),
        (0x0985, 0x098C, OtherLetter),
        (0x098F, 0x0990, OtherLetter),
        (0x0993, 0x09A8, OtherLetter),
        (0x09AA, 0x09B0, OtherLetter),
        (0x09B2, 0x09B2, OtherLetter),
        (0x09B6, 0x09B9, OtherLetter),
        (0x09BC, 0x09BC, NonspacingMark),
        (0x09BD, 0x09BD, OtherLetter),
        (0x09BE, 0x09C0, SpacingMark),
        (0x09C1, 0x09C4, NonspacingMark),
        (0x09C7, 0x09C8, SpacingMark),
        (0x09CB, 0x09CC, SpacingMark),
        (0x09CD, 0x09CD, NonspacingMark),
        (0x09CE, 0x09CE, OtherLetter),
        (0x09D7, 0x09D7, SpacingMark),
        (0x09DC, 0x09DD, OtherLetter),
        (0x09DF, 0x09E1, OtherLetter),
        (0x09E2, 0x09E3, NonspacingMark),
        (0x09E6, 0x09EF, DecimalNumber),
        (0x09F0, 0x09F1, OtherLetter),
        (0x09F2, 0x09F3, CurrencySymbol),
        (0x09F4, 0x09F9, OtherNumber),
        (0x09FA, 0x09FA, OtherSymbol),
        (0x09FB, 0x09FB, CurrencySymbol),
        (0x09FC, 0x09FC, OtherLetter),
        (0x09FD, 0x09FD, OtherPunctuation),
        (0x09FE, 0x09FE, NonspacingMark),
        (0x0A01, 0x0A02, NonspacingMark),
        (0x0A03, 0x0A03, SpacingMark),
        (0x0A05, 0x0A0A, OtherLetter),
        (0x0A0F, 0x0A10, OtherLetter),
        (0x0A13, 0x0A28, OtherLetter),
        (0x0A2A, 0x0A30, OtherLetter),
        (0x0A32, 0x0A33, OtherLetter),
        (0x0A35, 0x0A36, OtherLetter),
        (0x0A38, 0x0A39, OtherLetter),
        (0x0A3C, 0x0A3C, NonspacingMark),
        (0x0A3E, 0x0A40, SpacingMark),
        (0x0A41, 0x0A42, NonspacingMark),
        (0x0A47, 0x0A48, NonspacingMark),
        (0x0A4B, 0x0A4D, NonspacingMark),
        (0x0A51, 0x0A51, NonspacingMark),
        (0x0A59, 0x0A5C, OtherLetter),
        (0x0A5E, 0x0A5E, OtherLetter),
        (0x0A66, 0x0A6F, DecimalNumber),
        (0x0A70, 0x0A71, NonspacingMark),
        (0x0A72, 0x0A74, OtherLetter),
        (0x0A75, 0x0A75, NonspacingMark),
        (0x0A76, 0x0A76, OtherPunctuation),
        (0x0A81, 0x0A82, NonspacingMark),
        (0x0A83, 0x0A83, SpacingMark),
        (0x0A85, 0x0A8D, OtherLetter),
        (0x0A8F, 0x0A91, OtherLetter),
        (0x0A93, 0x0AA8, OtherLetter),
        (0x0AAA, 0x0AB0, OtherLetter),
        (0x0AB2, 0x0AB3, OtherLetter),
        (0x0AB5, 0x0AB9, OtherLetter),
        (0x0ABC, 0x0ABC, NonspacingMark),
        (0x0ABD, 0x0ABD, OtherLetter),
        (0x0ABE, 0x0AC0, SpacingMark),
        (0x0AC1, 0x0AC5, NonspacingMark),
        (0x0AC7, 0x0AC8, NonspacingMark),
        (0x0AC9, 0x0AC9, SpacingMark),
        (0x0ACB, 0x0ACC, SpacingMark),
        (0x0ACD, 0x0ACD, NonspacingMark),
        (0x0AD0, 0x0AD0, OtherLetter),
        (0x0AE0, 0x0AE1, OtherLetter),
        (0x0AE2, 0x0AE3, NonspacingMark),
        (0x0AE6, 0x0AEF, DecimalNumber),
        (0x0AF0, 0x0AF0, OtherPunctuation),
        (0x0AF1, 0x0AF1, CurrencySymbol),
        (0x0AF9, 0x0AF9, OtherLetter),
        (0x0AFA, 0x0AFF, NonspacingMark),
        (0x0B01, 0x0B01, NonspacingMark),
        (0x0B02, 0x0B03, SpacingMark),
        (0x0B05, 0x0B0C, OtherLetter),
        (0x0B0F, 0x0B10, OtherLetter),
        (0x0B13, 0x0B28, OtherLetter),
        (0x0B2A, 0x0B30, OtherLetter),
        (0x0B32, 0x0B33, OtherLetter),
        (0x0B35, 0x0B39, OtherLetter),
        (0x0B3C, 0x0B3C, NonspacingMark),
        (0x0B3D, 0x0B3D, OtherLetter),
        (0x0B3E, 0x0B3E, SpacingMark),
        (0x0B3F, 0x0B3F, NonspacingMark),
        (0x0B40, 0x0B40, SpacingMark),
        (0x0B41, 0x0B44, NonspacingMark),
        (0x0B47, 0x0B48, SpacingMark),
        (0x0B4B, 0x0B4C, SpacingMark),
        (0x0B4D, 0x0B4D, NonspacingMark),
        (0x0B55, 0x0B56, NonspacingMark),
        (0x0B57, 0x0B57, SpacingMark),
        (0x0B5C, 0x0B5D, OtherLetter),
        (0x0B5F, 0x0B61, OtherLetter),
        (0x0B62, 0x0B63, NonspacingMark),
        (0x0B66, 0x0B6F, DecimalNumber),
        (0x0B70, 0x0B70, OtherSymbol),
        (0x0B71, 0x0B71, OtherLetter),
        (0x0B72, 0x0B77, OtherNumber),
        (0x0B82, 0x0B82, NonspacingMark),
        (0x0B83, 0x0B83, OtherLetter),
        (0x0B85, 0x0B8A, OtherLetter),
        (0x0B8E, 0x0B90, OtherLetter),
        (0x0B92, 0x0B95, OtherLetter),
        (0x0B99, 0x0B9A, OtherLetter),
        (0x0B9C, 0x0B9C, OtherLetter),
        (0x0B9E, 0x0B9F, OtherLetter),
        (0x0BA3, 0x0BA4, OtherLetter),
        (0x0BA8, 0x0BAA, OtherLetter),
        (0x0BAE, 0x0BB9, OtherLetter),
        (0x0BBE, 0x0BBF, SpacingMark),
        (0x0BC0, 0x0BC0, NonspacingMark),
        (0x0BC1, 0x0BC2, SpacingMark),
        (0x0BC6, 0x0BC8, SpacingMark),
        (0x0BCA, 0x0BCC, SpacingMark),
        (0x0BCD, 0x0BCD, NonspacingMark),
        (0x0BD0, 0x0BD0, OtherLetter),
        (0x0BD7, 0x0BD7, SpacingMark),
        (0x0BE6, 0x0BEF, DecimalNumber),
        (0x0BF0, 0x0BF2, OtherNumber),
        (0x0BF3, 0x0BF8, OtherSymbol),
        (0x0BF9, 0x0BF9, CurrencySymbol),
        (0x0BFA, 0x0BFA, OtherSymbol),
        (0x0C00, 0x0C00, NonspacingMark),
        (0x0C01, 0x0C03, SpacingMark),
        (0x0C04, 0x0C04, NonspacingMark),
        (0x0C05, 0x0C0C, OtherLetter),
        (0x0C0E, 0x0C10, OtherLetter),
        (0x0C12, 0x0C28, OtherLetter),
        (0x0C2A, 0x0C39, OtherLetter),
        (0x0C3C, 0x0C3C, NonspacingMark),
        (0x0C3D, 0x0C3D, OtherLetter),
        (0x0C3E, 0x0C40, NonspacingMark),
        (0x0C41, 0x0C44, SpacingMark),
        (0x0C46, 0x0C48, NonspacingMark),
        (0x0C4A, 0x0C4D, NonspacingMark),
        (0x0C55, 0x0C56, NonspacingMark),
        (0x0C58, 0x0C5A, OtherLetter),
        (0x0C5D, 0x0C5D, OtherLetter),
        (0x0C60, 0x0C61, OtherLetter),
        (0x0C62, 0x0C63, NonspacingMark),
        (0x0C66, 0x0C6F, DecimalNumber),
        (0x0C77, 0x0C77, OtherPunctuation),
        (0x0C78, 0x0C7E, OtherNumber),
        (0x0C7F, 0x0C7F, OtherSymbol),
        (0x0C80, 0x0C80, OtherLetter),
        (0x0C81, 0x0C81, NonspacingMark),
        (0x0C82, 0x0C83, SpacingMark),
        (0x0C84, 0x0C84, OtherPunctuation),
        (0x0C85, 0x0C8C, OtherLetter),
        (0x0C8E, 0x0C90, OtherLetter),
        (0x0C92, 0x0CA8, OtherLetter),
        (0x0CAA, 0x0CB3, OtherLetter),
        (0x0CB5, 0x0CB9, OtherLetter),
        (0x0CBC, 0x0CBC, NonspacingMark),
        (0x0CBD, 0x0CBD, OtherLetter),
        (0x0CBE, 0x0CBE, SpacingMark),
        (0x0CBF, 0x0CBF, NonspacingMark),
        (0x0CC0, 0x0CC4, SpacingMark),
        (0x0CC6, 0x0CC6, NonspacingMark),
        (0x0CC7, 0x0CC8, SpacingMark),
        (0x0CCA, 0x0CCB, SpacingMark),
        (0x0CCC, 0x0CCD, NonspacingMark),
        (0x0CD5, 0x0CD6, SpacingMark),
        (0x0CDD, 0x0CDE, OtherLetter),
        (0x0CE0, 0x0CE1, OtherLetter),
        (0x0CE2, 0x0CE3, NonspacingMark),
        (0x0CE6, 0x0CEF, DecimalNumber),
        (0x0CF1, 0x0CF2, OtherLetter),
        (0x0D00, 0x0D01, NonspacingMark),
        (0x0D02, 0x0D03, SpacingMark),
        (0x0D04, 0x0D0C, OtherLetter),
        (0x0D0E, 0x0D10, OtherLetter),
        (0x0D12, 0x0D3A, OtherLetter),
        (0x0D3B, 0x0D3C, NonspacingMark),
        (0x0D3D, 0x0D3D, OtherLetter),
        (0x0D3E, 0x0D40, SpacingMark),
        (0x0D41, 0x0D44, NonspacingMark),
        (0x0D46, 0x0D48, SpacingMark),
        (0x0D4A, 0x0D4C, SpacingMark),
        (0x0D4D, 0x0D4D, NonspacingMark),
        (0x0D4E, 0x0D4E, OtherLetter),
        (0x0D4F, 0x0D4F, OtherSymbol),
        (0x0D54, 0x0D56, OtherLetter),
        (0x0D57, 0x0D57, SpacingMark),
        (0x0D58, 0x0D5E, OtherNumber),
        (0x0D5F, 0x0D61, OtherLetter),
        (0x0D62, 0x0D63, NonspacingMark),
        (0x0D66, 0x0D6F, DecimalNumber),
        (0x0D70, 0x0D78, OtherNumber),
        (0x0D79, 0x0D79, OtherSymbol),
        (0x0D7A, 0x0D7F, OtherLetter),
        (0x0D81, 0x0D81, NonspacingMark),
        (0x0D82, 0x0D83, SpacingMark),
        (0x0D85, 0x0D96, OtherLetter),
        (0x0D9A, 0x0DB1, OtherLetter),
        (0x0DB3, 0x0DBB, OtherLetter),
        (0x0DBD, 0x0DBD, OtherLetter),
        (0x0DC0, 0x0DC6, OtherLetter),
        (0x0DCA, 0x0DCA, NonspacingMark),
        (0x0DCF, 0x0DD1, SpacingMark),
        (0x0DD2, 0x0DD4, NonspacingMark),
        (0x0DD6, 0x0DD6, NonspacingMark),
        (0x0DD8, 0x0DDF, SpacingMark),
        (0x0DE6, 0x0DEF, DecimalNumber),
        (0x0DF2, 0x0DF3, SpacingMark),
        (0x0DF4, 0x0DF4, OtherPunctuation),
        (0x0E01, 0x0E30, OtherLetter),
        (0x0E31, 0x0E31, NonspacingMark),
        (0x0E32, 0x0E33, OtherLetter),
        (0x0E34, 0x0E3A, NonspacingMark),
        (0x0E3F, 0x0E3F, CurrencySymbol),
        (0x0E40, 0x0E45, OtherLetter),
        (0x0E46, 0x0E46, ModifierLetter),
        (0x0E47, 0x0E4E, NonspacingMark),
        (0x0E4F, 0x0E4F, OtherPunctuation),
        (0x0E50, 0x0E59, DecimalNumber),
        (0x0E5A, 0x0E5B, OtherPunctuation),
        (0x0E81, 0x0E82, OtherLetter),
        (0x0E84, 0x0E84, OtherLetter),
        (0x0E86, 0x0E8A, OtherLetter),
        (0x0E8C, 0x0EA3, OtherLetter),
        (0x0EA5, 0x0EA5, OtherLetter),
        (0x0EA7, 0x0EB0, OtherLetter),
        (0x0EB1, 0x0EB1, NonspacingMark),
        (0x0EB2, 0x0EB3, OtherLetter),
        (0x0EB4, 0x0EBC, NonspacingMark),
        (0x0EBD, 0x0EBD, OtherLetter),
        (0x0EC0, 0x0EC4, OtherLetter),
        (0x0EC6, 0x0EC6, ModifierLetter),
        (0x0EC8, 0x0ECD, NonspacingMark),
        (0x0ED0, 0x0ED9, DecimalNumber),
        (0x0EDC, 0x0EDF, OtherLetter),
        (0x0F00, 0x0F00, OtherLetter),
        (0x0F01, 0x0F03, OtherSymbol),
        (0x0F04, 0x0F12, OtherPunctuation),
        (0x0F13, 0x0F13, OtherSymbol),
        (0x0F14, 0x0F14, OtherPunctuation),
        (0x0F15, 0x0F17, OtherSymbol),
        (0x0F18, 0x0F19, NonspacingMark),
        (0x0F1A, 0x0F1F, OtherSymbol),
        (0x0F20, 0x0F29, DecimalNumber),
        (0x0F2A, 0x0F33, OtherNumber),
        (0x0F34, 0x0F34, OtherSymbol),
        (0x0F35, 0x0F35, NonspacingMark),
        (0x0F36, 0x0F36, OtherSymbol),
        (0x0F37, 0x0F37, NonspacingMark),
        (0x0F38, 0x0F38, OtherSymbol),
        (0x0F39, 0x0F39, NonspacingMark),
        (0x0F3A, 0x0F3A, OpenPunctuation),
        (0x0F3B, 0x0F3B, ClosePunctuation),
        (0x0F3C, 0x0F3C, OpenPunctuation),
        (0x0F3D, 0x0F3D, ClosePunctuation),
        (0x0F3E, 0x0F3F, SpacingMark),
        (0x0F40, 0x0F47, OtherLetter),
        (0x0F49, 0x0F6C, OtherLetter),
        (0x0F71, 0x0F7E, NonspacingMark),
        (0x0F7F, 0x0F7F, SpacingMark),
        (0x0F80, 0x0F84, NonspacingMark),
        (0x0F85, 0x0F85, OtherPunctuation),
        (0x0F86, 0x0F87, NonspacingMark),
        (0x0F88, 0x0F8C, OtherLetter),
        (0x0F8D, 0x0F97, NonspacingMark),
        (0x0F99, 0x0FBC, NonspacingMark),
        (0x0FBE, 0x0FC5, OtherSymbol),
        (0x0FC6, 0x0FC6, NonspacingMark),
        (0x0FC7, 0x0FCC, OtherSymbol),
        (0x0FCE, 0x0FCF, OtherSymbol),
        (0x0FD0, 0x0FD4, OtherPunctuation),
        (0x0FD5, 0x0FD8, OtherSymbol),
        (0x0FD9, 0x0FDA, OtherPunctuation),
        (0x1000, 0x102A, OtherLetter),
        (0x102B, 0x102C, SpacingMark),
        (0x102D, 0x1030, NonspacingMark),
        (0x1031, 0x1031, SpacingMark),
        (0x1032, 0x1037, NonspacingMark),
        (0x1038, 0x1038, SpacingMark),
        (0x1039, 0x103A, NonspacingMark),
        (0x103B, 0x103C, SpacingMark),
        (0x103D, 0x103E, NonspacingMark),
        (0x103F, 0x103F, OtherLetter),
        (0x1040, 0x1049, DecimalNumber),
        (0x104A, 0x104F, OtherPunctuation),
        (0x1050, 0x1055, OtherLetter),
        (0x1056, 0x1057, SpacingMark),
        (0x1058, 0x1059, NonspacingMark),
        (0x105A, 0x105D, OtherLetter),
        (0x105E, 0x1060, NonspacingMark),
        (0x1061, 0x1061, OtherLetter),
        (0x1062, 0x1064, SpacingMark),
        (0x1065, 0x1066, OtherLetter),
        (0x1067, 0x106D, SpacingMark),
        (0x106E, 0x1070, OtherLetter),
        (0x1071, 0x1074, NonspacingMark),
        (0x1075, 0x1081, OtherLetter),
        (0x1082, 0x1082, NonspacingMark),
        (0x1083, 0x1084, SpacingMark),
        (0x1085, 0x1086, NonspacingMark),
        (0x1087, 0x108C, SpacingMark),
        (0x108D, 0x108D, NonspacingMark),
        (0x108E, 0x108E, OtherLetter),
        (0x108F, 0x108F, SpacingMark),
        (0x1090, 0x1099, DecimalNumber),
        (0x109A, 0x109C, SpacingMark),
        (0x109D, 0x109D, NonspacingMark),
        (0x109E, 0x109F, OtherSymbol),
        (0x10A0, 0x10C5, UppercaseLetter),
        (0x10C7, 0x10C7, UppercaseLetter),
        (0x10CD, 0x10CD, UppercaseLetter),
        (0x10D0, 0x10FA, LowercaseLetter),
        (0x10FB, 0x10FB, OtherPunctuation),
        (0x10FC, 0x10FC, ModifierLetter),
        (0x10FD, 0x10FF, LowercaseLetter),
        (0x1100, 0x1248, OtherLetter),
        (0x124A, 0x124D, OtherLetter),
        (0x1250, 0x1256, OtherLetter),
        (0x1258, 0x1258, OtherLetter),
        (0x125A, 0x125D, OtherLetter),
        (0x1260, 0x1288, OtherLetter),
        (0x128A, 0x128D, OtherLetter),
        (0x1290, 0x12B0, OtherLetter),
        (0x12B2, 0x12B5, OtherLetter),
        (0x12B8, 0x12BE, OtherLetter),
        (0x12C0, 0x12C0, OtherLetter),
        (0x12C2, 0x12C5, OtherLetter),
        (0x12C8, 0x12D6, OtherLetter),
        (0x12D8, 0x1310, OtherLetter),
        (0x1312, 0x1315, OtherLetter),
        (0x1318, 0x135A, OtherLetter),
        (0x135D, 0x135F, NonspacingMark),
        (0x1360, 0x1368, OtherPunctuation),
        (0x1369, 0x137C, OtherNumber),
        (0x1380, 0x138F, OtherLetter),
        (0x1390, 0x1399, OtherSymbol),
        (0x13A0, 0x13F5, UppercaseLetter),
        (0x13F8, 0x13FD, LowercaseLetter),
        (0x1400, 0x1400, DashPunctuation),
        (0x1401, 0x166C, OtherLetter),
        (0x166D, 0x166D, OtherSymbol),
        (0x166E, 0x166E, OtherPunctuation),
        (0x166F, 0x167F, OtherLetter),
        (0x1680, 0x1680, SpaceSeparator),
        (0x1681, 0x169A, OtherLetter),
        (0x169B, 0x169B, OpenPunctuation),
        (0x169C, 0x169C, ClosePunctuation),
        (0x16A0, 0x16EA, OtherLetter),
        (0x16EB, 0x16ED, OtherPunctuation),
        (0x16EE, 0x16F0, LetterNumber),
        (0x16F1, 0x16F8, OtherLetter),
        (0x1700, 0x1711, OtherLetter),
        (0x1712, 0x1714, NonspacingMark),
        (0x1715, 0x1715, SpacingMark),
        (0x171F, 0x1731, OtherLetter),
        (0x1732, 0x1733, NonspacingMark),
        (0x1734, 0x1734, SpacingMark),
        (0x1735, 0x1736, OtherPunctuation),
        (0x1740, 0x1751, OtherLetter),
        (0x1752, 0x1753, NonspacingMark),
        (0x1760, 0x176C, OtherLetter),
        (0x176E, 0x1770, OtherLetter),
        (0x1772, 0x1773, NonspacingMark),
        (0x1780, 0x17B3, OtherLetter),
        (0x17B4, 0x17B5, NonspacingMark),
        (0x17B6, 0x17B6, SpacingMark),
        (0x17B7, 0x17BD, NonspacingMark),
        (0x17BE, 0x17C5, SpacingMark),
        (0x17C6, 0x17C6, NonspacingMark),
        (0x17C7, 0x17C8, SpacingMark),
        (0x17C9, 0x17D3, NonspacingMark),
        (0x17D4, 0x17D6, OtherPunctuation),
        (0x17D7, 0x17D7, ModifierLetter),
        (0x17D8, 0x17DA, OtherPunctuation),
        (0x17DB, 0x17DB, CurrencySymbol),
        (0x17DC, 0x17DC, OtherLetter),
        (0x17DD, 0x17DD, NonspacingMark),
        (0x17E0, 0x17E9, DecimalNumber),
        (0x17F0, 0x17F9, OtherNumber),
        (0x1800, 0x1805, OtherPunctuation),
        (0x1806, 0x1806, DashPunctuation),
        (0x1807, 0x180A, OtherPunctuation),
        (0x180B, 0x180D, NonspacingMark),
        (0x180E, 0x180E, Format),
        (0x180F, 0x180F, NonspacingMark),
        (0x1810, 0x1819, DecimalNumber),
        (0x1820, 0x1842, OtherLetter),
        (0x1843, 0x1843, ModifierLetter),
        (0x1844, 0x1878, OtherLetter),
        (0x1880, 0x1884, OtherLetter),
        (0x1885, 0x1886, NonspacingMark),
        (0x1887, 0x18A8, OtherLetter),
        (0x18A9, 0x18A9, NonspacingMark),
        (0x18AA, 0x18AA, OtherLetter),
        (0x18B0, 0x18F5, OtherLetter),
        (0x1900, 0x191E, OtherLetter),
        (0x1920, 0x1922, NonspacingMark),
        (0x1923, 0x1926, SpacingMark),
        (0x1927, 0x1928, NonspacingMark),
        (0x1929, 0x192B, SpacingMark),
        (0x1930, 0x1931, SpacingMark),
        (0x1932, 0x1932, NonspacingMark),
        (0x1933, 0x1938, SpacingMark),
        (0x1939, 0x193B, NonspacingMark),
        (0x1940, 0x1940, OtherSymbol),
        (0x1944, 0x1945, OtherPunctuation),
        (0x1946, 0x194F, DecimalNumber),
        (0x1950, 0x196D, OtherLetter),
        (0x1970, 0x1974, OtherLetter),
        (0x1980, 0x19AB, OtherLetter),
        (0x19B0, 0x19C9, OtherLetter),
        (0x19D0, 0x19D9, DecimalNumber),
        (0x19DA, 0x19DA, OtherNumber),
        (0x19DE, 0x19FF, OtherSymbol),
        (0x1A00, 0x1A16, OtherLetter),
        (0x1A17, 0x1A18, NonspacingMark),
        (0x1A19, 0x1A1A, SpacingMark),
        (0x1A1B, 0x1A1B, NonspacingMark),
        (0x1A1E, 0x1A1F, OtherPunctuation),
        (0x1A20, 0x1A54, OtherLetter),
        (0x1A55, 0x1A55, SpacingMark),
        (0x1A56, 0x1A56, NonspacingMark),
        (0x1A57, 0x1A57, SpacingMark),
        (0x1A58, 0x1A5E, NonspacingMark),
        (0x1A60, 0x1A60, NonspacingMark),
        (0x1A61, 0x1A61, SpacingMark),
        (0x1A62, 0x1A62, NonspacingMark),
        (0x1A63, 0x1A64, SpacingMark),
        (0x1A65, 0x1A6C, NonspacingMark),
        (0x1A6D, 0x1A72, SpacingMark),
        (0x1A73, 0x1A7C, NonspacingMark),
        (0x1A7F, 0x1A7F, NonspacingMark),
        (0x1A80, 0x1A89, DecimalNumber),
        (0x1A90, 0x1A99, DecimalNumber),
        (0x1AA0, 0x1AA6, OtherPunctuation),
        (0x1AA7, 0x1AA7, ModifierLetter),
        (0x1AA8, 0x1AAD, OtherPunctuation),
        (0x1AB0, 0x1ABD, NonspacingMark),
        (0x1ABE, 0x1ABE, EnclosingMark),
        (0x1ABF, 0x1ACE, NonspacingMark),
        (0x1B00, 0x1B03, NonspacingMark),
        (0x1B04, 0x1B04, SpacingMark),
        (0x1B05, 0x1B33, OtherLetter),
        (0x1B34, 0x1B34, NonspacingMark),
        (0x1B35, 0x1B35, SpacingMark),
        (0x1B36, 0x1B3A, NonspacingMark),
        (0x1B3B, 0x1B3B, SpacingMark),
        (0x1B3C, 0x1B3C, NonspacingMark),
        (0x1B3D, 0x1B41, SpacingMark),
        (0x1B42, 0x1B42, NonspacingMark),
        (0x1B43, 0x1B44, SpacingMark),
        (0x1B45, 0x1B4C, OtherLetter),
        (0x1B50, 0x1B59, DecimalNumber),
        (0x1B5A, 0x1B60, OtherPunctuation),
        (0x1B61, 0x1B6A, OtherSymbol),
        (0x1B6B, 0x1B73, NonspacingMark),
        (0x1B74, 0x1B7C, OtherSymbol),
        (0x1B7D, 0x1B7E, OtherPunctuation),
        (0x1B80, 0x1B81, NonspacingMark),
        (0x1B82, 0x1B82, SpacingMark),
        (0x1B83, 0x1BA0, OtherLetter),
        (0x1BA1, 0x1BA1, SpacingMark),
        (0x1BA2, 0x1BA5, NonspacingMark),
        (0x1BA6, 0x1BA7, SpacingMark),
        (0x1BA8, 0x1BA9, NonspacingMark),
        (0x1BAA, 0x1BAA, SpacingMark),
        (0x1BAB, 0x1BAD, NonspacingMark),
        (0x1BAE, 0x1BAF, OtherLetter),
        (0x1BB0, 0x1BB9, DecimalNumber),
        (0x1BBA, 0x1BE5, OtherLetter),
        (0x1BE6, 0x1BE6, NonspacingMark),
        (0x1BE7, 0x1BE7, SpacingMark),
        (0x1BE8, 0x1BE9, NonspacingMark),
        (0x1BEA, 0x1BEC, SpacingMark),
        (0x1BED, 0x1BED, NonspacingMark),
        (0x1BEE, 0x1BEE, SpacingMark),
        (0x1BEF, 0x1BF1, NonspacingMark),
        (0x1BF2, 0x1BF3, SpacingMark),
        (0x1BFC, 0x1BFF, OtherPunctuation),
        (0x1C00, 0x1C23, OtherLetter),
        (0x1C24, 0x1C2B, SpacingMark),
        (0x1C2C, 0x1C33, NonspacingMark),
        (0x1C34, 0x1C35, SpacingMark),
        (0x1C36, 0x1C37, NonspacingMark),
        (0x1C3B, 0x1C3F, OtherPunctuation),
        (0x1C40, 0x1C49, DecimalNumber),
        (0x1C4D, 0x1C4F, OtherLetter),
        (0x1C50, 0x1C59, DecimalNumber),
        (0x1C5A, 0x1C77, OtherLetter),
        (0x1C78, 0x1C7D, ModifierLetter),
        (0x1C7E, 0x1C7F, OtherPunctuation),
        (0x1C80, 0x1C88, LowercaseLetter),
        (0x1C90, 0x1CBA, UppercaseLetter),
        (0x1CBD, 0x1CBF, UppercaseLetter),
        (0x1CC0, 0x1CC7, OtherPunctuation),
        (0x1CD0, 0x1CD2, NonspacingMark),
        (0x1CD3, 0x1CD3, OtherPunctuation),
        (0x1CD4, 0x1CE0, NonspacingMark),
        (0x1CE1, 0x1CE1, SpacingMark),
        (0x1CE2, 0x1CE8, NonspacingMark),
        (0x1CE9, 0x1CEC, OtherLetter),
        (0x1CED, 0x1CED, NonspacingMark),
        (0x1CEE, 0x1CF3, OtherLetter),
        (0x1CF4, 0x1CF4, NonspacingMark),
        (0x1CF5, 0x1CF6, OtherLetter),
        (0x1CF7, 0x1CF7, SpacingMark),
        (0x1CF8, 0x1CF9, NonspacingMark),
        (0x1CFA, 0x1CFA, OtherLetter),
        (0x1D00, 0x1D2B, LowercaseLetter),
        (0x1D2C, 0x1D6A, ModifierLetter),
        (0x1D6B, 0x1D77, LowercaseLetter),
        (0x1D78, 0x1D78, ModifierLetter),
        (0x1D79, 0x1D9A, LowercaseLetter),
        (0x1D9B, 0x1DBF, ModifierLetter),
        (0x1DC0, 0x1DFF, NonspacingMark),
        (0x1E00, 0x1E00, UppercaseLetter),
        (0x1E01, 0x1E01, LowercaseLetter),
        (0x1E02, 0x1E02, UppercaseLetter),
        (0x1E03, 0x1E03, LowercaseLetter),
        (0x1E04, 0x1E04, UppercaseLetter),
        (0x1E05, 0x1E05, LowercaseLetter),
        (0x1E06, 0x1E06, UppercaseLetter),
        (0x1E07, 0x1E07, LowercaseLetter),
        (0x1E08, 0x1E08, UppercaseLetter),
        (0x1E09, 0x1E09, LowercaseLetter),
        (0x1E0A, 0x1E0A, UppercaseLetter),
        (0x1E0B, 0x1E0B, LowercaseLetter),
        (0x1E0C, 0x1E0C, UppercaseLetter),
        (0x1E0D, 0x1E0D, LowercaseLetter),
        (0x1E0E, 0x1E0E, UppercaseLetter),
        (0x1E0F, 0x1E0F, LowercaseLetter),
        (0x1E10, 0x1E10, UppercaseLetter),
        (0x1E11, 0x1E11, LowercaseLetter),
        (0x1E12, 0x1E12, UppercaseLetter),
        (0x1E13, 0x1E13, LowercaseLetter),
        (0x1E14, 0x1E14, UppercaseLetter),
        (0x1E15, 0x1E15, LowercaseLetter),
        (0x1E16, 0x1E16, UppercaseLetter),
        (0x1E17, 0x1E17, LowercaseLetter),
        (0x1E18, 0x1E18, UppercaseLetter),
        (0x1E19, 0x1E19, LowercaseLetter),
        (0x1E1A, 0x1E1A, UppercaseLetter),
        (0x1E1B, 0x1E1B, LowercaseLetter),
        (0x1E1C, 0x1E1C, UppercaseLetter),
        (0x1E1D, 0x1E1D, LowercaseLetter),
        (0x1E1E, 0x1E1E, UppercaseLetter),
        (0x1E1F, 0x1E1F, LowercaseLetter),
        (0x1E20, 0x1E20, UppercaseLetter),
        (0x1E21, 0x1E21, LowercaseLetter),
        (0x1E22, 0x1E22, UppercaseLetter),
        (0x1E23, 0x1E23, LowercaseLetter),
        (0x1E24, 0x1E24, UppercaseLetter),
        (0x1E25, 0x1E25, LowercaseLetter),
        (0x1E26, 0x1E26, UppercaseLetter),
        (0x1E27, 0x1E27, LowercaseLetter),
        (0x1E28, 0x1E28, UppercaseLetter),
        (0x1E29, 0x1E29, LowercaseLetter),
        (0x1E2A, 0x1E2A, UppercaseLetter),
        (0x1E2B, 0x1E2B, LowercaseLetter),
        (0x1E2C, 0x1E2C, UppercaseLetter),
        (0x1E2D, 0x1E2D, LowercaseLetter),
        (0x1E2E, 0x1E2E, UppercaseLetter),
        (0x1E2F, 0x1E2F, LowercaseLetter),
        (0x1E30, 0x1E30, UppercaseLetter),
        (0x1E31, 0x1E31, LowercaseLetter),
        (0x1E32, 0x1E32, UppercaseLetter),
        (0x1E33, 0x1E33, LowercaseLetter),
        (0x1E34, 0x1E34, UppercaseLetter),
        (0x1E35, 0x1E35, LowercaseLetter),
        (0x1E36, 0x1E36, UppercaseLetter),
        (0x1E37, 0x1E37, LowercaseLetter),
        (0x1E38, 0x1E38, UppercaseLetter),
        (0x1E39, 0x1E39, LowercaseLetter),
        (0x1E3A, 0x1E3A, UppercaseLetter),
        (0x1E3B, 0x1E3B, LowercaseLetter),
        (0x1E3C, 0x1E3C, UppercaseLetter),
        (0x1E3D, 0x1E3D, LowercaseLetter),
        (0x1E3E, 0x1E3E, UppercaseLetter),
        (0x1E3F, 0x1E3F, LowercaseLetter),
        (0x1E40, 0x1E40, UppercaseLetter),
        (0x1E41, 0x1E41, LowercaseLetter),
        (0x1E42, 0x1E42, UppercaseLetter),
        (0x1E43, 0x1E43, LowercaseLetter),
        (0x1E44, 0x1E44, UppercaseLetter),
        (0x1E45, 0x1E45, LowercaseLetter),
        (0x1E46, 0x1E46, UppercaseLetter),
        (0x1E47, 0x1E47, LowercaseLetter),
        (0x1E48, 0x1E48, UppercaseLetter),
        (0x1E49, 0x1E49, LowercaseLetter),
        (0x1E4A, 0x1E4A, UppercaseLetter),
        (0x1E4B, 0x1E4B, LowercaseLetter),
        (0x1E4C, 0x1E4C, UppercaseLetter),
        (0x1E4D, 0x1E4D, LowercaseLetter),
        (0x1E4E, 0x1E4E, UppercaseLetter),
        (0x1E4F, 0x1E4F, LowercaseLetter),
        (0x1E50, 0x1E50, UppercaseLetter),
        (0x1E51, 0x1E51, LowercaseLetter),
        (0x1E52, 0x1E52, UppercaseLetter),
        (0x1E53, 0x1E53, LowercaseLetter),
        (0x1E54, 0x1E54, UppercaseLetter),
        (0x1E55, 0x1E55, LowercaseLetter),
        (0x1E56, 0x1E56, UppercaseLetter),
        (0x1E57, 0x1E57, LowercaseLetter),
        (0x1E58, 0x1E58, UppercaseLetter),
        (0x1E59, 0x1E59, LowercaseLetter),
        (0x1E5A, 0x1E5A, UppercaseLetter),
        (0x1E5B, 0x1E5B, LowercaseLetter),
        (0x1E5C, 0x1E5C, UppercaseLetter),
        (0x1E5D, 0x1E5D, LowercaseLetter),
        (0x1E5E, 0x1E5E, UppercaseLetter),
        (0x1E5F, 0x1E5F, LowercaseLetter),
        (0x1E60, 0x1E60, UppercaseLetter),
        (0x1E61, 0x1E61, LowercaseLetter),
        (0x1E62, 0x1E62, UppercaseLetter),
        (0x1E63, 0x1E63, LowercaseLetter),
        (0x1E64, 0x1E64, UppercaseLetter),
        (0x1E65, 0x1E65, LowercaseLetter),
        (0x1E66, 0x1E66, UppercaseLetter),
        (0x1E67, 0x1E67, LowercaseLetter),
        (0x1E68, 0x1E68, UppercaseLetter),
        (0x1E69, 0x1E69, LowercaseLetter),
        (0x1E6A, 0x1E6A, UppercaseLetter),
        (0x1E6B, 0x1E6B, LowercaseLetter),
        (0x1E6C, 0x1E6C, UppercaseLetter),
        (0x1E6D, 0x1E6D, LowercaseLetter),
        (0x1E6E, 0x1E6E, UppercaseLetter),
        (0x1E6F, 0x1E6F, LowercaseLetter),
        (0x1E70, 0x1E70, UppercaseLetter),
        (0x1E71, 0x1E71, LowercaseLetter),
        (0x1E72, 0x1E72, UppercaseLetter),
        (0x1E73, 0x1E73, LowercaseLetter),
        (0x1E74, 0x1E74, UppercaseLetter),
        (0x1E75, 0x1E75, LowercaseLetter),
        (0x1E76, 0x1E76, UppercaseLetter),
        (0x1E77, 0x1E77, LowercaseLetter),
        (0x1E78, 0x1E78, UppercaseLetter),
        (0x1E79, 0x1E79, LowercaseLetter),
        (0x1E7A, 0x1E7A, UppercaseLetter),
        (0x1E7B, 0x1E7B, LowercaseLetter),
        (0x1E7C, 0x1E7C, UppercaseLetter),
        (0x1E7D, 0x1E7D, LowercaseLetter),
        (0x1E7E, 0x1E7E, UppercaseLetter),
        (0x1E7F, 0x1E7F, LowercaseLetter),
        (0x1E80, 0x1E80, UppercaseLetter),
        (0x1E81, 0x1E81, LowercaseLetter),
        (0x1E82, 0x1E82, UppercaseLetter),
        (0x1E83, 0x1E83, LowercaseLetter),
        (0x1E84, 0x1E84, UppercaseLetter),
        (0x1E85, 0x1E85, LowercaseLetter),
        (0x1E86, 0x1E86, UppercaseLetter),
        (0x1E87, 0x1E87, LowercaseLetter),
        (0x1E88, 0x1E88, UppercaseLetter),
        (0x1E89, 0x1E89, LowercaseLetter),
        (0x1E8A, 0x1E8A, UppercaseLetter),
        (0x1E8B, 0x1E8B, LowercaseLetter),
        (0x1E8C, 0x1E8C, UppercaseLetter),
        (0x1E8D, 0x1E8D, LowercaseLetter),
        (0x1E8E, 0x1E8E, UppercaseLetter),
        (0x1E8F, 0x1E8F, LowercaseLetter),
        (0x1E90, 0x1E90, UppercaseLetter),
        (0x1E91, 0x1E91, LowercaseLetter),
        (0x1E92, 0x1E92, UppercaseLetter),
        (0x1E93, 0x1E93, LowercaseLetter),
        (0x1E94, 0x1E94, UppercaseLetter),
        (0x1E95, 0x1E9D, LowercaseLetter),
        (0x1E9E, 0x1E9E, UppercaseLetter),
        (0x1E9F, 0x1E9F, LowercaseLetter),
        (0x1EA0, 0x1EA0, UppercaseLetter),
        (0x1EA1, 0x1EA1, LowercaseLetter),
        (0x1EA2, 0x1EA2, UppercaseLetter),
        (0x1EA3, 0x1EA3, LowercaseLetter),
        (0x1EA4, 0x1EA4, UppercaseLetter),
        (0x1EA5, 0x1EA5, LowercaseLetter),
        (0x1EA6, 0x1EA6, UppercaseLetter),
        (0x1EA7, 0x1EA7, LowercaseLetter),
        (0x1EA8, 0x1EA8, UppercaseLetter),
        (0x1EA9, 0x1EA9, LowercaseLetter),
        (0x1EAA, 0x1EAA, UppercaseLetter),
        (0x1EAB, 0x1EAB, LowercaseLetter),
        (0x1EAC, 0x1EAC, UppercaseLetter),
        (0x1EAD, 0x1EAD, LowercaseLetter),
        (0x1EAE, 0x1EAE, UppercaseLetter),
        (0x1EAF, 0x1EAF, LowercaseLetter),
        (0x1EB0, 0x1EB0, UppercaseLetter),
        (0x1EB1, 0x1EB1, LowercaseLetter),
        (0x1EB2, 0x1EB2, UppercaseLetter),
        (0x1EB3, 0x1EB3, LowercaseLetter),
        (0x1EB4, 0x1EB4, UppercaseLetter),
        (0x1EB5, 0x1EB5, LowercaseLetter),
        (0x1EB6, 0x1EB6, UppercaseLetter),
        (0x1EB7, 0x1EB7, LowercaseLetter),
        (0x1EB8, 0x1EB8, UppercaseLetter),
        (0x1EB9, 0x1EB9, LowercaseLetter),
        (0x1EBA, 0x1EBA, UppercaseLetter),
        (0x1EBB, 0x1EBB, LowercaseLetter),
        (0x1EBC, 0x1EBC, UppercaseLetter),
        (0x1EBD, 0x1EBD, LowercaseLetter),
        (0x1EBE, 0x1EBE, UppercaseLetter),
        (0x1EBF, 0x1EBF, LowercaseLetter),
        (0x1EC0, 0x1EC0, UppercaseLetter),
        (0x1EC1, 0x1EC1, LowercaseLetter),
        (0x1EC2, 0x1EC2, UppercaseLetter),
        (0x1EC3, 0x1EC3, LowercaseLetter),
        (0x1EC4, 0x1EC4, UppercaseLetter),
        (0x1EC5, 0x1EC5, LowercaseLetter),
        (0x1EC6, 0x1EC6, UppercaseLetter),
        (0x1EC7, 0x1EC7, LowercaseLetter),
        (0x1EC8, 0x1EC8, UppercaseLetter),
        (0x1EC9, 0x1EC9, LowercaseLetter),
        (0x1ECA, 0x1ECA, UppercaseLetter),
        (0x1ECB, 0x1ECB, LowercaseLetter),
        (0x1ECC, 0x1ECC, UppercaseLetter),
        (0x1ECD, 0x1ECD, LowercaseLetter),
        (0x1ECE, 0x1ECE, UppercaseLetter),
        (0x1ECF, 0x1ECF, LowercaseLetter),
        (0x1ED0, 0x1ED0, UppercaseLetter),
        (0x1ED1, 0x1ED1, LowercaseLetter),
        (0x1ED2, 0x1ED2, UppercaseLetter),
        (0x1ED3, 0x1ED3, LowercaseLetter),
        (0x1ED4, 0x1ED4, UppercaseLetter),
        (0x1ED5, 0x1ED5, LowercaseLetter),
        (0x1ED6, 0x1ED6, UppercaseLetter),
        (0x1ED7, 0x1ED7, LowercaseLetter),
        (0x1ED8, 0x1ED8, UppercaseLetter),
        (0x1ED9, 0x1ED9, LowercaseLetter),
        (0x1EDA, 0x1EDA, UppercaseLetter),
        (0x1EDB, 0x1EDB, LowercaseLetter),
        (0x1EDC, 0x1EDC, UppercaseLetter),
        (0x1EDD, 0x1EDD, LowercaseLetter),
        (0x1EDE, 0x1EDE, UppercaseLetter),
        (0x1EDF, 0x1EDF, LowercaseLetter),
        (0x1EE0, 0x1EE0, UppercaseLetter),
        (0x1EE1, 0x1EE1, LowercaseLetter),
        (0x1EE2, 0x1EE2, UppercaseLetter),
        (0x1EE3, 0x1EE3, LowercaseLetter),
        (0x1EE4, 0x1EE4, UppercaseLetter),
        (0x1EE5, 0x1EE5, LowercaseLetter),
        (0x1EE6, 0x1EE6, UppercaseLetter),
        (0x1EE7, 0x1EE7, LowercaseLetter),
        (0x1EE8, 0x1EE8, UppercaseLetter),
        (0x1EE9, 0x1EE9, LowercaseLetter),
        (0x1EEA, 0x1EEA, UppercaseLetter),
        (0x1EEB, 0x1EEB, LowercaseLetter),
        (0x1EEC, 0x1EEC, UppercaseLetter),
        (0x1EED, 0x1EED, LowercaseLetter),
        (0x1EEE, 0x1EEE, UppercaseLetter),
        (0x1EEF, 0x1EEF, LowercaseLetter),
        (0x1EF0, 0x1EF0, UppercaseLetter),
        (0x1EF1, 0x1EF1, LowercaseLetter),
        (0x1EF2, 0x1EF2, UppercaseLetter),
        (0x1EF3, 0x1EF3, LowercaseLetter),
        (0x1EF4, 0x1EF4, UppercaseLetter),
        (0x1EF5, 0x1EF5, LowercaseLetter),
        (0x1EF6, 0x1EF6, UppercaseLetter),
        (0x1EF7, 0x1EF7, LowercaseLetter),
        (0x1EF8, 0x1EF8, UppercaseLetter),
        (0x1EF9, 0x1EF9, LowercaseLetter),
        (0x1EFA, 0x1EFA, UppercaseLetter),
        (0x1EFB, 0x1EFB, LowercaseLetter),
        (0x1EFC, 0x1EFC, UppercaseLetter),
        (0x1EFD, 0x1EFD, LowercaseLetter),
        (0x1EFE, 0x1EFE, UppercaseLetter),
        (0x1EFF, 0x1F07, LowercaseLetter),
        (0x1F08, 0x1F0F, UppercaseLetter),
        (0x1F10, 0x1F15, LowercaseLetter),
        (0x1F18, 0x1F1D, UppercaseLetter),
        (0x1F20, 0x1F27, LowercaseLetter),
        (0x1F28, 0x1F2F, UppercaseLetter),
        (0x1F30, 0x1F37, LowercaseLetter),
        (0x1F38, 0x1F3F, UppercaseLetter),
        (0x1F40, 0x1F45, LowercaseLetter),
        (0x1F48, 0x1F4D, UppercaseLetter),
        (0x1F50, 0x1F57, LowercaseLetter),
        (0x1F59, 0x1F59, UppercaseLetter),
        (0x1F5B, 0x1F5B, UppercaseLetter),
        (0x1F5D, 0x1F5D, UppercaseLetter),
        (0x1F5F, 0x1F5F, UppercaseLetter),
        (0x1F60, 0x1F67, LowercaseLetter),
        (0x1F68, 0x1F6F, UppercaseLetter),
        (0x1F70, 0x1F7D, LowercaseLetter),
        (0x1F80, 0x1F87, LowercaseLetter),
        (0x1F88, 0x1F8F, TitlecaseLetter),
        (0x1F90, 0x1F97, LowercaseLetter),
        (0x1F98, 0x1F9F, TitlecaseLetter),
        (0x1FA0, 0x1FA7, LowercaseLetter),
        (0x1FA8, 0x1FAF, TitlecaseLetter),
        (0x1FB0, 0x1FB4, LowercaseLetter),
        (0x1FB6, 0x1FB7, LowercaseLetter),
        (0x1FB8, 0x1FBB, UppercaseLetter),
        (0x1FBC, 0x1FBC, TitlecaseLetter),
        (0x1FBD, 0x1FBD, ModifierSymbol),
        (0x1FBE, 0x1FBE, LowercaseLetter),
        (0x1FBF, 0x1FC1, ModifierSymbol),
        (0x1FC2, 0x1FC4, LowercaseLetter),
        (0x1FC6, 0x1FC7, LowercaseLetter),
        (0x1FC8, 0x1FCB, UppercaseLetter),
        (0x1FCC, 0x1FCC, TitlecaseLetter),
        (0x1FCD, 0x1FCF, ModifierSymbol),
        (0x1FD0, 0x1FD3, LowercaseLetter),
        (0x1FD6, 0x1FD7, LowercaseLetter),
        (0x1FD8, 0x1FDB, UppercaseLetter),
        (0x1FDD, 0x1FDF, ModifierSymbol),
        (0x1FE0, 0x1FE7, LowercaseLetter),
        (0x1FE8, 0x1FEC, UppercaseLetter),
        (0x1FED, 0x1FEF, ModifierSymbol),
        (0x1FF2, 0x1FF4, LowercaseLetter),
        (0x1FF6, 0x1FF7, LowercaseLetter),
        (0x1FF8, 0x1FFB, UppercaseLetter),
        (0x1FFC, 0x1FFC, TitlecaseLetter),
        (0x1FFD, 0x1FFE, ModifierSymbol),
        (0x2000, 0x200A, SpaceSeparator),
        (0x200B, 0x200F, Format),
        (0x2010, 0x2015, DashPunctuation),
        (0x2016, 0x2017, OtherPunctuation),
        (0x2018, 0x2018, InitialPunctuation),
        (0x2019, 0x2019, FinalPunctuation),
        (0x201A, 0x201A, OpenPunctuation),
        (0x201B, 0x201C, InitialPunctuation),
        (0x201D, 0x201D, FinalPunctuation),
        (0x201E, 0x201E, OpenPunctuation),
        (0x201F, 0x201F, InitialPunctuation),
        (0x2020, 0x2027, OtherPunctuation),
        (0x2028, 0x2028, LineSeparator),
        (0x2029, 0x2029, ParagraphSeparator),
        (0x202A, 0x202E, Format),
        (0x202F, 0x202F, SpaceSeparator),
        (0x2030, 0x2038, OtherPunctuation),
        (0x2039, 0x2039, InitialPunctuation),
        (0x203A, 0x203A, FinalPunctuation),
        (0x203B, 0x203E, OtherPunctuation),
        (0x203F, 0x2040, ConnectorPunctuation),
        (0x2041, 0x2043, OtherPunctuation),
        (0x2044, 0x2044, MathSymbol),
        (0x2045, 0x2045, OpenPunctuation),
        (0x2046, 0x2046, ClosePunctuation),
        (0x2047, 0x2051, OtherPunctuation),
        (0x2052, 0x2052, MathSymbol),
        (0x2053, 0x2053, OtherPunctuation),
        (0x2054, 0x2054, ConnectorPunctuation),
        (0x2055, 0x205E, OtherPunctuation),
        (0x205F, 0x205F, SpaceSeparator),
        (0x2060, 0x2064, Format),
        (0x2066, 0x206F, Format),
        (0x2070, 0x2070, OtherNumber),
        (0x2071, 0x2071, ModifierLetter),
        (0x2074, 0x2079, OtherNumber),
        (0x207A, 0x207C, MathSymbol),
        (0x207D, 0x207D, OpenPunctuation),
        (0x207E, 0x207E, ClosePunctuation),
        (0x207F, 0x207F, ModifierLetter),
        (0x2080, 0x2089, OtherNumber),
        (0x208A, 0x208C, MathSymbol),
        (0x208D, 0x208D, OpenPunctuation),
        (0x208E, 0x208E, ClosePunctuation),
        (0x2090, 0x209C, ModifierLetter),
        (0x20A0, 0x20C0, CurrencySymbol),
        (0x20D0, 0x20DC, NonspacingMark),
        (0x20DD, 0x20E0, EnclosingMark),
        (0x20E1, 0x20E1, NonspacingMark),
        (0x20E2, 0x20E4, EnclosingMark),
        (0x20E5, 0x20F0, NonspacingMark),
        (0x2100, 0x2101, OtherSymbol),
        (0x2102, 0x2102, UppercaseLetter),
        (0x2103, 0x2106, OtherSymbol),
        (0x2107, 0x2107, UppercaseLetter),
        (0x2108, 0x2109, OtherSymbol),
        (0x210A, 0x210A, LowercaseLetter),
        (0x210B, 0x210D, UppercaseLetter),
        (0x210E, 0x210F, LowercaseLetter),
        (0x2110, 0x2112, UppercaseLetter),
        (0x2113, 0x2113, LowercaseLetter),
        (0x2114, 0x2114, OtherSymbol),
        (0x2115, 0x2115, UppercaseLetter),
        (0x2116, 0x2117, OtherSymbol),
        (0x2118, 0x2118, MathSymbol),
        (0x2119, 0x211D, UppercaseLetter),
        (0x211E, 0x2123, OtherSymbol),
        (0x2124, 0x2124, UppercaseLetter),
        (0x2125, 0x2125, OtherSymbol),
        (0x2126, 0x2126, UppercaseLetter),
        (0x2127, 0x2127, OtherSymbol),
        (0x2128, 0x2128, UppercaseLetter),
        (0x2129, 0x2129, OtherSymbol),
        (0x212A, 0x212D, UppercaseLetter),
        (0x212E, 0x212E, OtherSymbol),
        (0x212F, 0x212F, LowercaseLetter),
        (0x2130, 0x2133, UppercaseLetter),
        (0x2134, 0x2134, LowercaseLetter),
        (0x2135, 0x2138, OtherLetter),
        (0x2139, 0x2139, LowercaseLetter),
        (0x213A, 0x213B, OtherSymbol),
        (0x213C, 0x213D, LowercaseLetter),
        (0x213E, 0x213F, UppercaseLetter),
        (0x2140, 0x2144, MathSymbol),
        (0x2145, 0x2145, UppercaseLetter),
        (0x2146, 0x2149, LowercaseLetter),
        (0x214A, 0x214A, OtherSymbol),
        (0x214B, 0x214B, MathSymbol),
        (0x214C, 0x214D, OtherSymbol),
        (0x214E, 0x214E, LowercaseLetter),
        (0x214F, 0x214F, OtherSymbol),
        (0x2150, 0x215F, OtherNumber),
        (0x2160, 0x2182, LetterNumber),
        (0x2183, 0x2183, UppercaseLetter),
        (0x2184, 0x2184, LowercaseLetter),
        (0x2185, 0x2188, LetterNumber),
        (0x2189, 0x2189, OtherNumber),
        (0x218A, 0x218B, OtherSymbol),
        (0x2190, 0x2194, MathSymbol),
        (0x2195, 0x2199, OtherSymbol),
        (0x219A, 0x219B, MathSymbol),
        (0x219C, 0x219F, OtherSymbol),
        (0x21A0, 0x21A0, MathSymbol),
        (0x21A1, 0x21A2, OtherSymbol),
        (0x21A3, 0x21A3, MathSymbol),
        (0x21A4, 0x21A5, OtherSymbol),
        (0x21A6, 0x21A6, MathSymbol),
        (0x21A7, 0x21AD, OtherSymbol),
        (0x21AE, 0x21AE, MathSymbol),
        (0x21AF, 0x21CD, OtherSymbol),
        (0x21CE, 0x21CF, MathSymbol),
        (0x21D0, 0x21D1, OtherSymbol),
        (0x21D2, 0x21D2, MathSymbol),
        (0x21D3, 0x21D3, OtherSymbol),
        (0x21D4, 0x21D4, MathSymbol),
        (0x21D5, 0x21F3, OtherSymbol),
        (0x21F4, 0x22FF, MathSymbol),
        (0x2300, 0x2307, OtherSymbol),
        (0x2308, 0x2308, OpenPunctuation),
        (0x2309, 0x2309, ClosePunctuation),
        (0x230A, 0x230A, OpenPunctuation),
        (0x230B, 0x230B, ClosePunctuation),
        (0x230C, 0x231F, OtherSymbol),
        (0x2320, 0x2321, MathSymbol),
        (0x2322, 0x2328, OtherSymbol),
        (0x2329, 0x2329, OpenPunctuation),
        (0x232A, 0x232A, ClosePunctuation),
        (0x232B, 0x237B, OtherSymbol),
        (0x237C, 0x237C, MathSymbol),
        (0x237D, 0x239A, OtherSymbol),
        (0x239B, 0x23B3, MathSymbol),
        (0x23B4, 0x23DB, OtherSymbol),
        (0x23DC, 0x23E1, MathSymbol),
        (0x23E2, 0x2426, OtherSymbol),
        (0x2440, 0x244A, OtherSymbol),
        (0x2460, 0x249B, OtherNumber),
        (0x249C, 0x24E9, OtherSymbol),
        (0x24EA, 0x24FF, OtherNumber),
        (0x2500, 0x25B6, OtherSymbol),
        (0x25B7, 0x25B7, MathSymbol),
        (0x25B8, 0x25C0, OtherSymbol),
        (0x25C1, 0x25C1, MathSymbol),
        (0x25C2, 0x25F7, OtherSymbol),
        (0x25F8, 0x25FF, MathSymbol),
        (0x2600, 0x266E, OtherSymbol),
        (0x266F, 0x266F, MathSymbol),
        (0x2670, 0x2767, OtherSymbol),
        (0x2768, 0x2768, OpenPunctuation),
        (0x2769, 0x2769, ClosePunctuation),
        (0x276A, 0x276A, OpenPunctuation),
        (0x276B, 0x276B, ClosePunctuation),
        (0x276C, 0x276C, OpenPunctuation),
        (0x276D, 0x276D, ClosePunctuation),
        (0x276E, 0x276E, OpenPunctuation),
        (0x276F, 0x276F, ClosePunctuation),
        (0x2770, 0x2770, OpenPunctuation),
        (0x2771, 0x2771, ClosePunctuation),
        (0x2772, 0x2772, OpenPunctuation),
        (0x2773, 0x2773, ClosePunctuation),
        (0x2774, 0x2774, OpenPunctuation),
        (0x2775, 0x2775, ClosePunctuation),
        (0x2776, 0x2793, OtherNumber),
        (0x2794, 0x27BF, OtherSymbol),
        (0x27C0, 0x27C4, MathSymbol),
        (0x27C5, 0x27C5, OpenPunctuation),
        (0x27C6, 0x27C6, ClosePunctuation),
        (0x27C7, 0x27E5, MathSymbol),
        (0x27E6, 0x27E6, OpenPunctuation),
        (0x27E7, 0x27E7, ClosePunctuation),
        (0x27E8, 0x27E8, OpenPunctuation),
        (0x27E9, 0x27E9, ClosePunctuation),
        (0x27EA, 0x27EA, OpenPunctuation),
        (0x27EB, 0x27EB, ClosePunctuation),
        (0x27EC, 0x27EC, OpenPunctuation),
        (0x27ED, 0x27ED, ClosePunctuation),
        (0x27EE, 0x27EE, OpenPunctuation),
        (0x27EF, 0x27EF, ClosePunctuation),
        (0x27F0, 0x27FF, MathSymbol),
        (0x2800, 0x28FF, OtherSymbol),
        (0x2900, 0x2982, MathSymbol),
        (0x2983, 0x2983, OpenPunctuation),
        (0x2984, 0x2984, ClosePunctuation),
        (0x2985, 0x2985, OpenPunctuation),
        (0x2986, 0x2986, ClosePunctuation),
        (0x2987, 0x2987, OpenPunctuation),
        (0x2988, 0x2988, ClosePunctuation),
        (0x2989, 0x2989, OpenPunctuation),
        (0x298A, 0x298A, ClosePunctuation),
        (0x298B, 0x298B, OpenPunctuation),
        (0x298C, 0x298C, ClosePunctuation),
        (0x298D, 0x298D, OpenPunctuation),
        (0x298E, 0x298E, ClosePunctuation),
        (0x298F, 0x298F, OpenPunctuation),
        (0x2990, 0x2990, ClosePunctuation),
        (0x2991, 0x2991, OpenPunctuation),
        (0x2992, 0x2992, ClosePunctuation),
        (0x2993, 0x2993, OpenPunctuation),
        (0x2994, 0x2994, ClosePunctuation),
        (0x2995, 0x2995, OpenPunctuation),
        (0x2996, 0x2996, ClosePunctuation),
        (0x2997, 0x2997, OpenPunctuation),
        (0x2998, 0x2998, ClosePunctuation),
        (0x2999, 0x29D7, MathSymbol),
        (0x29D8, 0x29D8, OpenPunctuation),
        (0x29D9, 0x29D9, ClosePunctuation),
        (0x29DA, 0x29DA, OpenPunctuation),
        (0x29DB, 0x29DB, ClosePunctuation),
        (0x29DC, 0x29FB, MathSymbol),
        (0x29FC, 0x29FC, OpenPunctuation),
        (0x29FD, 0x29FD, ClosePunctuation),
        (0x29FE, 0x2AFF, MathSymbol),
        (0x2B00, 0x2B2F, OtherSymbol),
        (0x2B30, 0x2B44, MathSymbol),
        (0x2B45, 0x2B46, OtherSymbol),
        (0x2B47, 0x2B4C, MathSymbol),
        (0x2B4D, 0x2B73, OtherSymbol),
        (0x2B76, 0x2B95, OtherSymbol),
        (0x2B97, 0x2BFF, OtherSymbol),
        (0x2C00, 0x2C2F, UppercaseLetter),
        (0x2C30, 0x2C5F, LowercaseLetter),
        (0x2C60, 0x2C60, UppercaseLetter),
        (0x2C61, 0x2C61, LowercaseLetter),
        (0x2C62, 0x2C64, UppercaseLetter),
        (0x2C65, 0x2C66, LowercaseLetter),
        (0x2C67, 0x2C67, UppercaseLetter),
        (0x2C68, 0x2C68, LowercaseLetter),
        (0x2C69, 0x2C69, UppercaseLetter),
        (0x2C6A, 0x2C6A, LowercaseLetter),
        (0x2C6B, 0x2C6B, UppercaseLetter),
        (0x2C6C, 0x2C6C, LowercaseLetter),
        (0x2C6D, 0x2C70, UppercaseLetter),
        (0x2C71, 0x2C71, LowercaseLetter),
        (0x2C72, 0x2C72, UppercaseLetter),
        (0x2C73, 0x2C74, LowercaseLetter),
        (0x2C75, 0x2C75, UppercaseLetter),
        (0x2C76, 0x2C7B, LowercaseLetter),
        (0x2C7C, 0x2C7D, ModifierLetter),
        (0x2C7E, 0x2C80, UppercaseLetter),
        (0x2C81, 0x2C81, LowercaseLetter),
        (0x2C82, 0x2C82, UppercaseLetter),
        (0x2C83, 0x2C83, LowercaseLetter),
        (0x2C84, 0x2C84, UppercaseLetter),
        (0x2C85, 0x2C85, LowercaseLetter),
        (0x2C86, 0x2C86, UppercaseLetter),
        (0x2C87, 0x2C87, LowercaseLetter),
        (0x2C88, 0x2C88, UppercaseLetter),
        (0x2C89, 0x2C89, LowercaseLetter),
        (0x2C8A, 0x2C8A, UppercaseLetter),
        (0x2C8B, 0x2C8B, LowercaseLetter),
        (0x2C8C, 0x2C8C, UppercaseLetter),
        (0x2C8D, 0x2C8D, LowercaseLetter),
        (0x2C8E, 0x2C8E, UppercaseLetter),
        (0x2C8F, 0x2C8F, LowercaseLetter),
        (0x2C90, 0x2C90, UppercaseLetter),
        (0x2C91, 0x2C91, LowercaseLetter),
        (0x2C92, 0x2C92, UppercaseLetter),
        (0x2C93, 0x2C93, LowercaseLetter),
        (0x2C94, 0x2C94, UppercaseLetter),
        (0x2C95, 0x2C95, LowercaseLetter),
        (0x2C96, 0x2C96, UppercaseLetter),
        (0x2C97, 0x2C97, LowercaseLetter),
        (0x2C98, 0x2C98, UppercaseLetter),
        (0x2C99, 0x2C99, LowercaseLetter),
        (0x2C9A, 0x2C9A, UppercaseLetter),
        (0x2C9B, 0x2C9B, LowercaseLetter),
        (0x2C9C, 0x2C9C, UppercaseLetter),
        (0x2C9D, 0x2C9D, LowercaseLetter),
        (0x2C9E, 0x2C9E, UppercaseLetter),
        (0x2C9F, 0x2C9F, LowercaseLetter),
        (0x2CA0, 0x2CA0, UppercaseLetter),
        (0x2CA1, 0x2CA1, LowercaseLetter),
        (0x2CA2, 0x2CA2, UppercaseLetter),
        (0x2CA3, 0x2CA3, LowercaseLetter),
        (0x2CA4, 0x2CA4, UppercaseLetter),
        (0x2CA5, 0x2CA5, LowercaseLetter),
        (0x2CA6, 0x2CA6, UppercaseLetter),
        (0x2CA7, 0x2CA7, LowercaseLetter),
        (0x2CA8, 0x2CA8, UppercaseLetter),
        (0x2CA9, 0x2CA9, LowercaseLetter),
        (0x2CAA, 0x2CAA, UppercaseLetter),
        (0x2CAB, 0x2CAB, LowercaseLetter),
        (0x2CAC, 0x2CAC, UppercaseLetter),
        (0x2CAD, 0x2CAD, LowercaseLetter),
        (0x2CAE, 0x2CAE, UppercaseLetter),
        (0x2CAF, 0x2CAF, LowercaseLetter),
        (0x2CB0, 0x2CB0, UppercaseLetter),
        (0x2CB1, 0x2CB1, LowercaseLetter),
        (0x2CB2, 0x2CB2, UppercaseLetter),
        (0x2CB3, 0x2CB3, LowercaseLetter),
        (0x2CB4, 0x2CB4, UppercaseLetter),
        (0x2CB5, 0x2CB5, LowercaseLetter),
        (0x2CB6, 0x2CB6, UppercaseLetter),
        (0x2CB7, 0x2CB7, LowercaseLetter),
        (0x2CB8, 0x2CB8, UppercaseLetter),
        (0x2CB9, 0x2CB9, LowercaseLetter),
        (0x2CBA, 0x2CBA, UppercaseLetter),
        (0x2CBB, 0x2CBB, LowercaseLetter),
        (0x2CBC, 0x2CBC, UppercaseLetter),
        (0x2CBD, 0x2CBD, LowercaseLetter),
        (0x2CBE, 0x2CBE, UppercaseLetter),
        (0x2CBF, 0x2CBF, LowercaseLetter),
        (0x2CC0, 0x2CC0, UppercaseLetter),
        (0x2CC1, 0x2CC1, LowercaseLetter),
        (0x2CC2, 0x2CC2, UppercaseLetter),
        (0x2CC3, 0x2CC3, LowercaseLetter),
        (0x2CC4, 0x2CC4, UppercaseLetter),
        (0x2CC5, 0x2CC5, LowercaseLetter),
        (0x2CC6, 0x2CC6, UppercaseLetter),
        (0x2CC7, 0x2CC7, LowercaseLetter),
        (0x2CC8, 0x2CC8, UppercaseLetter),
        (0x2CC9, 0x2CC9, LowercaseLetter),
        (0x2CCA, 0x2CCA, UppercaseLetter),
        (0x2CCB, 0x2CCB, LowercaseLetter),
        (0x2CCC, 0x2CCC, UppercaseLetter),
        (0x2CCD, 0x2CCD, LowercaseLetter),
        (0x2CCE, 0x2CCE, UppercaseLetter),
        (0x2CCF, 0x2CCF, LowercaseLetter),
        (0x2CD0, 0x2CD0, UppercaseLetter),
        (0x2CD1, 0x2CD1, LowercaseLetter),
        (0x2CD2, 0x2CD2, UppercaseLetter),
        (0x2CD3, 0x2CD3, LowercaseLetter),
        (0x2CD4, 0x2CD4, UppercaseLetter),
        (0x2CD5, 0x2CD5, LowercaseLetter),
        (0x2CD6, 0x2CD6, UppercaseLetter),
        (0x2CD7, 0x2CD7, LowercaseLetter),
        (0x2CD8, 0x2CD8, UppercaseLetter),
        (0x2CD9, 0x2CD9, LowercaseLetter),
        (0x2CDA, 0x2CDA, UppercaseLetter),
        (0x2CDB, 0x2CDB, LowercaseLetter),
        (0x2CDC, 0x2CDC, UppercaseLetter),
        (0x2CDD, 0x2CDD, LowercaseLetter),
        (0x2CDE, 0x2CDE, UppercaseLetter),
        (0x2CDF, 0x2CDF, LowercaseLetter),
        (0x2CE0, 0x2CE0, UppercaseLetter),
        (0x2CE1, 0x2CE1, LowercaseLetter),
        (0x2CE2, 0x2CE2, UppercaseLetter),
        (0x2CE3, 0x2CE4, LowercaseLetter),
        (0x2CE5, 0x2CEA, OtherSymbol),
        (0x2CEB, 0x2CEB, UppercaseLetter),
        (0x2CEC, 0x2CEC, LowercaseLetter),
        (0x2CED, 0x2CED, UppercaseLetter),
        (0x2CEE, 0x2CEE, LowercaseLetter),
        (0x2CEF, 0x2CF1, NonspacingMark),
        (0x2CF2, 0x2CF2, UppercaseLetter),
        (0x2CF3, 0x2CF3, LowercaseLetter),
        (0x2CF9, 0x2CFC, OtherPunctuation),
        (0x2CFD, 0x2CFD, OtherNumber),
        (0x2CFE, 0x2CFF, OtherPunctuation),
        (0x2D00, 0x2D25, LowercaseLetter),
        (0x2D27, 0x2D27, LowercaseLetter),
        (0x2D2D, 0x2D2D, LowercaseLetter),
        (0x2D30, 0x2D67, OtherLetter),
        (0x2D6F, 0x2D6F, ModifierLetter),
        (0x2D70, 0x2D70, OtherPunctuation),
        (0x2D7F, 0x2D7F, NonspacingMark),
        (0x2D80, 0x2D96, OtherLetter),
        (0x2DA0, 0x2DA6, OtherLetter),
        (0x2DA8, 0x2DAE, OtherLetter),
        (0x2DB0, 0x2DB6, OtherLetter),
        (0x2DB8, 0x2DBE, OtherLetter),
        (0x2DC0, 0x2DC6, OtherLetter),
        (0x2DC8, 0x2DCE, OtherLetter),
        (0x2DD0, 0x2DD6, OtherLetter),
        (0x2DD8, 0x2DDE, OtherLetter),
        (0x2DE0, 0x2DFF, NonspacingMark),
        (0x2E00, 0x2E01, OtherPunctuation),
        (0x2E02, 0x2E02, InitialPunctuation),
        (0x2E03, 0x2E03, FinalPunctuation),
        (0x2E04, 0x2E04, InitialPunctuation),
        (0x2E05, 0x2E05, FinalPunctuation),
        (0x2E06, 0x2E08, OtherPunctuation),
        (0x2E09, 0x2E09, InitialPunctuation),
        (0x2E0A, 0x2E0A, FinalPunctuation),
        (0x2E0B, 0x2E0B, OtherPunctuation),
        (0x2E0C, 0x2E0C, InitialPunctuation),
        (0x2E0D, 0x2E0D, FinalPunctuation),
        (0x2E0E, 0x2E16, OtherPunctuation),
        (0x2E17, 0x2E17, DashPunctuation),
        (0x2E18, 0x2E19, OtherPunctuation),
        (0x2E1A, 0x2E1A, DashPunctuation),
        (0x2E1B, 0x2E1B, OtherPunctuation),
        (0x2E1C, 0x2E1C, InitialPunctuation),
        (0x2E1D, 0x2E1D, FinalPunctuation),
        (0x2E1E, 0x2E1F, OtherPunctuation),
        (0x2E20, 0x2E20, InitialPunctuation),
        (0x2E21, 0x2E21, FinalPunctuation),
        (0x2E22, 0x2E22, OpenPunctuation),
        (0x2E23, 0x2E23, ClosePunctuation),
        (0x2E24, 0x2E24, OpenPunctuation),
        (0x2E25, 0x2E25, ClosePunctuation),
        (0x2E26, 0x2E26, OpenPunctuation),
        (0x2E27, 0x2E27, ClosePunctuation),
        (0x2E28, 0x2E28, OpenPunctuation),
        (0x2E29, 0x2E29, ClosePunctuation),
        (0x2E2A, 0x2E2E, OtherPunctuation),
        (0x2E2F, 0x2E2F, ModifierLetter),
        (0x2E30, 0x2E39, OtherPunctuation),
        (0x2E3A, 0x2E3B, DashPunctuation),
        (0x2E3C, 0x2E3F, OtherPunctuation),
        (0x2E40, 0x2E40, DashPunctuation),
        (0x2E41, 0x2E41, OtherPunctuation),
        (0x2E42, 0x2E42, OpenPunctuation),
        (0x2E43, 0x2E4F, OtherPunctuation),
        (0x2E50, 0x2E51, OtherSymbol),
        (0x2E52, 0x2E54, OtherPunctuation),
        (0x2E55, 0x2E55, OpenPunctuation),
        (0x2E56, 0x2E56, ClosePunctuation),
        (0x2E57, 0x2E57, OpenPunctuation),
        (0x2E58, 0x2E58, ClosePunctuation),
        (0x2E59, 0x2E59, OpenPunctuation),
        (0x2E5A, 0x2E5A, ClosePunctuation),
        (0x2E5B, 0x2E5B, OpenPunctuation),
        (0x2E5C, 0x2E5C, ClosePunctuation),
        (0x2E5D, 0x2E5D, DashPunctuation),
        (0x2E80, 0x2E99, OtherSymbol),
        (0x2E9B, 0x2EF3, OtherSymbol),
        (0x2F00, 0x2FD5, OtherSymbol),
        (0x2FF0, 0x2FFB, OtherSymbol),
        (0x3000, 0x3000, SpaceSeparator),
        (0x3001, 0x3003, OtherPunctuation),
        (0x3004, 0x3004, OtherSymbol),
        (0x3005, 0x3005, ModifierLetter),
        (0x3006, 0x3006, OtherLetter),
        (0x3007, 0x3007, LetterNumber),
        (0x3008, 0x3008, OpenPunctuation),
        (0x3009, 0x3009, ClosePunctuation),
        (0x300A, 0x300A, OpenPunctuation),
        (0x300B, 0x300B, ClosePunctuation),
        (0x300C, 0x300C, OpenPunctuation),
        (0x300D, 0x300D, ClosePunctuation),
        (0x300E, 0x300E, OpenPunctuation),
        (0x300F, 0x300F, ClosePunctuation),
        (0x3010, 0x3010, OpenPunctuation),
        (0x3011, 0x3011, ClosePunctuation),
        (0x3012, 0x3013, OtherSymbol),
        (0x3014, 0x3014, OpenPunctuation),
        (0x3015, 0x3015, ClosePunctuation),
        (0x3016, 0x3016, OpenPunctuation),
        (0x3017, 0x3017, ClosePunctuation),
        (0x3018, 0x3018, OpenPunctuation),
        (0x3019, 0x3019, ClosePunctuation),
        (0x301A, 0x301A, OpenPunctuation),
        (0x301B, 0x301B, ClosePunctuation),
        (0x301C, 0x301C, DashPunctuation),
        (0x301D, 0x301D, OpenPunctuation),
        (0x301E, 0x301F, ClosePunctuation),
        (0x3020, 0x3020, OtherSymbol),
        (0x3021, 0x3029, LetterNumber),
        (0x302A, 0x302D, NonspacingMark),
        (0x302E, 0x302F, SpacingMark),
        (0x3030, 0x3030, DashPunctuation),
        (0x3031, 0x3035, ModifierLetter),
        (0x3036, 0x3037, OtherSymbol),
        (0x3038, 0x303A, LetterNumber),
        (0x303B, 0x303B, ModifierLetter),
        (0x303C, 0x303C, OtherLetter),
        (0x303D, 0x303D, OtherPunctuation),
        (0x303E, 0x303F, OtherSymbol),
        (0x3041, 0x3096, OtherLetter),
        (0x3099, 0x309A, NonspacingMark),
        (0x309B, 0x309C, ModifierSymbol),
        (0x309D, 0x309E, ModifierLetter),
        (0x309F, 0x309F, OtherLetter),
        (0x30A0, 0x30A0, DashPunctuation),
        (0x30A1, 0x30FA, OtherLetter),
        (0x30FB, 0x30FB, OtherPunctuation),
        (0x30FC, 0x30FE, ModifierLetter),
        (0x30FF, 0x30FF, OtherLetter),
        (0x3105, 0x312F, OtherLetter),
        (0x3131, 0x318E, OtherLetter),
        (0x3190, 0x3191, OtherSymbol),
        (0x3192, 0x3195, OtherNumber),
        (0x3196, 0x319F, OtherSymbol),
        (0x31A0, 0x31BF, OtherLetter),
        (0x31C0, 0x31E3, OtherSymbol),
        (0x31F0, 0x31FF, OtherLetter),
        (0x3200, 0x321E, OtherSymbol),
        (0x3220, 0x3229, OtherNumber),
        (0x322A, 0x3247, OtherSymbol),
        (0x3248, 0x324F, OtherNumber),
        (0x3250, 0x3250, OtherSymbol),
        (0x3251, 0x325F, OtherNumber),
        (0x3260, 0x327F, OtherSymbol),
        (0x3280, 0x3289, OtherNumber),
        (0x328A, 0x32B0, OtherSymbol),
        (0x32B1, 0x32BF, OtherNumber),
        (0x32C0, 0x33FF, OtherSymbol),
        (0x3400, 0x4DBF, OtherLetter),
        (0x4DC0, 0x4DFF, OtherSymbol),
        (0x4E00, 0xA014, OtherLetter),
        (0xA015, 0xA015, ModifierLetter),
        (0xA016, 0xA48C, OtherLetter),
        (0xA490, 0xA4C6, OtherSymbol),
        (0xA4D0, 0xA4F7, OtherLetter),
        (0xA4F8, 0xA4FD, ModifierLetter),
        (0xA4FE, 0xA4FF, OtherPunctuation),
        (0xA500, 0xA60B, OtherLetter),
        (0xA60C, 0xA60C, ModifierLetter),
        (0xA60D, 0xA60F, OtherPunctuation),
        (0xA610, 0xA61F, OtherLetter),
        (0xA620, 0xA629, DecimalNumber),
        (0xA62A, 0xA62B, OtherLetter),
        (0xA640, 0xA640, UppercaseLetter),
        (0xA641, 0xA641, LowercaseLetter),
        (0xA642, 0xA642, UppercaseLetter),
        (0xA643, 0xA643, LowercaseLetter),
        (0xA644, 0xA644, UppercaseLetter),
        (0xA645, 0xA645, LowercaseLetter),
        (0xA646, 0xA646, UppercaseLetter),
        (0xA647, 0xA647, LowercaseLetter),
        (0xA648, 0xA648, UppercaseLetter),
        (0xA649, 0xA649, LowercaseLetter),
        (0xA64A, 0xA64A, UppercaseLetter),
        (0xA64B, 0xA64B, LowercaseLetter),
        (0xA64C, 0xA64C, UppercaseLetter),
        (0xA64D, 0xA64D, LowercaseLetter),
        (0xA64E, 0xA64E, UppercaseLetter),
        (0xA64F, 0xA64F, LowercaseLetter),
        (0xA650, 0xA650, UppercaseLetter),
        (0xA651, 0xA651, LowercaseLetter),
        (0xA652, 0xA652, UppercaseLetter),
        (0xA653, 0xA653, LowercaseLetter),
        (0xA654, 0xA654, UppercaseLetter),
        (0xA655, 0xA655, LowercaseLetter),
        (0xA656, 0xA656, UppercaseLetter),
        (0xA657, 0xA657, LowercaseLetter),
        (0xA658, 0xA658, UppercaseLetter),
        (0xA659, 0xA659, LowercaseLetter),
        (0xA65A, 0xA65A, UppercaseLetter),
        (0xA65B, 0xA65B, LowercaseLetter),
        (0xA65C, 0xA65C, UppercaseLetter),
        (0xA65D, 0xA65D, LowercaseLetter),
        (0xA65E, 0xA65E, UppercaseLetter),
        (0xA65F, 0xA65F, LowercaseLetter),
        (0xA660, 0xA660, UppercaseLetter),
        (0xA661, 0xA661, LowercaseLetter),
        (0xA662, 0xA662, UppercaseLetter),
        (0xA663, 0xA663, LowercaseLetter),
        (0xA664, 0xA664, UppercaseLetter),
        (0xA665, 0xA665, LowercaseLetter),
        (0xA666, 0xA666, UppercaseLetter),
        (0xA667, 0xA667, LowercaseLetter),
        (0xA668, 0xA668, UppercaseLetter),
        (0xA669, 0xA669, LowercaseLetter),
        (0xA66A, 0xA66A, UppercaseLetter),
        (0xA66B, 0xA66B, LowercaseLetter),
        (0xA66C, 0xA66C, UppercaseLetter),
        (0xA66D, 0xA66D, LowercaseLetter),
        (0xA66E, 0xA66E, OtherLetter),
        (0xA66F, 0xA66F, NonspacingMark),
        (0xA670, 0xA672, EnclosingMark),
        (0xA673, 0xA673, OtherPunctuation),
        (0xA674, 0xA67D, NonspacingMark),
        (0xA67E, 0xA67E, OtherPunctuation),
        (0xA67F, 0xA67F, ModifierLetter),
        (0xA680, 0xA680, UppercaseLetter),
        (0xA681, 0xA681, LowercaseLetter),
        (0xA682, 0xA682, UppercaseLetter),
        (0xA683, 0xA683, LowercaseLetter),
        (0xA684, 0xA684, UppercaseLetter),
        (0xA685, 0xA685, LowercaseLetter),
        (0xA686, 0xA686, UppercaseLetter),
        (0xA687, 0xA687, LowercaseLetter),
        (0xA688, 0xA688, UppercaseLetter),
        (0xA689, 0xA689, LowercaseLetter),
        (0xA68A, 0xA68A, UppercaseLetter),
        (0xA68B, 0xA68B, LowercaseLetter),
        (0xA68C, 0xA68C, UppercaseLetter),
        (0xA68D, 0xA68D, LowercaseLetter),
        (0xA68E, 0xA68E, UppercaseLetter),
        (0xA68F, 0xA68F, LowercaseLetter),
        (0xA690, 0xA690, UppercaseLetter),
        (0xA691, 0xA691, LowercaseLetter),
        (0xA692, 0xA692, UppercaseLetter),
        (0xA693, 0xA693, LowercaseLetter),
        (0xA694, 0xA694, UppercaseLetter),
        (0xA695, 0xA695, LowercaseLetter),
        (0xA696, 0xA696, UppercaseLetter),
        (0xA697, 0xA697, LowercaseLetter),
        (0xA698, 0xA698, UppercaseLetter),
        (0xA699, 0xA699, LowercaseLetter),
        (0xA69A, 0xA69A, UppercaseLetter),
        (0xA69B, 0xA69B, LowercaseLetter),
        (0xA69C, 0xA69D, ModifierLetter),
        (0xA69E, 0xA69F, NonspacingMark),
        (0xA6A0, 0xA6E5, OtherLetter),
        (0xA6E6, 0xA6EF, LetterNumber),
        (0xA6F0, 0xA6F1, NonspacingMark),
        (0xA6F2, 0xA6F7, OtherPunctuation),
        (0xA700, 0xA716, ModifierSymbol),
        (0xA717, 0xA71F, ModifierLetter),
        (0xA720, 0xA721, ModifierSymbol),
        (0xA722, 0xA722, UppercaseLetter),
        (0xA723, 0xA723, LowercaseLetter),
        (0xA724, 0xA724, UppercaseLetter),
        (0xA725, 0xA725, LowercaseLetter),
        (0xA726, 0xA726, UppercaseLetter),
        (0xA727, 0xA727, LowercaseLetter),
        (0xA728, 0xA728, UppercaseLetter),
        (0xA729, 0xA729, LowercaseLetter),
        (0xA72A, 0xA72A, UppercaseLetter),
        (0xA72B, 0xA72B, LowercaseLetter),
        (0xA72C, 0xA72C, UppercaseLetter),
        (0xA72D, 0xA72D, LowercaseLetter),
        (0xA72E, 0xA72E, UppercaseLetter),
        (0xA72F, 0xA731, LowercaseLetter),
        (0xA732, 0xA732, UppercaseLetter),
        (0xA733, 0xA733, LowercaseLetter),
        (0xA734, 0xA734, UppercaseLetter),
        (0xA735, 0xA735, LowercaseLetter),
        (0xA736, 0xA736, UppercaseLetter),
        (0xA737, 0xA737, LowercaseLetter),
        (0xA738, 0xA738, UppercaseLetter),
        (0xA739, 0xA739, LowercaseLetter),
        (0xA73A, 0xA73A, UppercaseLetter),
        (0xA73B, 0xA73B, LowercaseLetter),
        (0xA73C, 0xA73C, UppercaseLetter),
        (0xA73D, 0xA73D, LowercaseLetter),
        (0xA73E, 0xA73E, UppercaseLetter),
        (0xA73F, 0xA73F, LowercaseLetter),
        (0xA740, 0xA740, UppercaseLetter),
        (0xA741, 0xA741, LowercaseLetter),
        (0xA742, 0xA742, UppercaseLetter),
        (0xA743, 0xA743, LowercaseLetter),
        (0xA744, 0xA744, UppercaseLetter),
        (0xA745, 0xA745, LowercaseLetter),
        (0xA746, 0xA746, UppercaseLetter),
        (0xA747, 0xA747, LowercaseLetter),
        (0xA748, 0xA748, UppercaseLetter),
        (0xA749, 0xA749, LowercaseLetter),
        (0xA74A, 0xA74A, UppercaseLetter),
        (0xA74B, 0xA74B, LowercaseLetter),
        (0xA74C, 0xA74C, UppercaseLetter),
        (0xA74D, 0xA74D, LowercaseLetter),
        (0xA74E, 0xA74E, UppercaseLetter),
        (0xA74F, 0xA74F, LowercaseLetter),
        (0xA750, 0xA750, UppercaseLetter),
        (0xA751, 0xA751, LowercaseLetter),
        (0xA752, 0xA752, UppercaseLetter),
        (0xA753, 0xA753, LowercaseLetter),
        (0xA754, 0xA754, UppercaseLetter),
        (0xA755, 0xA755, LowercaseLetter),
        (0xA756, 0xA756, UppercaseLetter),
        (0xA757, 0xA757, LowercaseLetter),
        (0xA758, 0xA758, UppercaseLetter),
        (0xA759, 0xA759, LowercaseLetter),
        (0xA75A, 0xA75A, UppercaseLetter),
        (0xA75B, 0xA75B, LowercaseLetter),
        (0xA75C, 0xA75C, UppercaseLetter),
        (0xA75D, 0xA75D, LowercaseLetter),
        (0xA75E, 0xA75E, UppercaseLetter),
        (0xA75F, 0xA75F, LowercaseLetter),
        (0xA760, 0xA760, UppercaseLetter),
        (0xA761, 0xA761, LowercaseLetter),
        (0xA762, 0xA762, UppercaseLetter),
        (0xA763, 0xA763, LowercaseLetter),
        (0xA764, 0xA764, UppercaseLetter),
        (0xA765, 0xA765, LowercaseLetter),
        (0xA766, 0xA766, UppercaseLetter),
        (0xA767, 0xA767, LowercaseLetter),
        (0xA768, 0xA768, UppercaseLetter),
        (0xA769, 0xA769, LowercaseLetter),
        (0xA76A, 0xA76A, UppercaseLetter),
        (0xA76B, 0xA76B, LowercaseLetter),
        (0xA76C, 0xA76C, UppercaseLetter),
        (0xA76D, 0xA76D, LowercaseLetter),
        (0xA76E, 0xA76E, UppercaseLetter),
        (0xA76F, 0xA76F, LowercaseLetter),
        (0xA770, 0xA770, ModifierLetter),
        (0xA771, 0xA778, LowercaseLetter),
        (0xA779, 0xA779, UppercaseLetter),
        (0xA77A, 0xA77A, LowercaseLetter),
        (0xA77B, 0xA77B, UppercaseLetter),
        (0xA77C, 0xA77C, LowercaseLetter),
        (0xA77D, 0xA77E, UppercaseLetter),
        (0xA77F, 0xA77F, LowercaseLetter),
        (0xA780, 0xA780, UppercaseLetter),
        (0xA781, 0xA781, LowercaseLetter),
        (0xA782, 0xA782, UppercaseLetter),
        (0xA783, 0xA783, LowercaseLetter),
        (0xA784, 0xA784, UppercaseLetter),
        (0xA785, 0xA785, LowercaseLetter),
        (0xA786, 0xA786, UppercaseLetter),
        (0xA787, 0xA787, LowercaseLetter),
        (0xA788, 0xA788, ModifierLetter),
        (0xA789, 0xA78A, ModifierSymbol),
        (0xA78B, 0xA78B, UppercaseLetter),
        (0xA78C, 0xA78C, LowercaseLetter),
        (0xA78D, 0xA78D, UppercaseLetter),
        (0xA78E, 0xA78E, LowercaseLetter),
        (0xA78F, 0xA78F, OtherLetter),
        (0xA790, 0xA790, UppercaseLetter),
        (0xA791, 0xA791, LowercaseLetter),
        (0xA792, 0xA792, UppercaseLetter),
        (0xA793, 0xA795, LowercaseLetter),
        (0xA796, 0xA796, UppercaseLetter),
        (0xA797, 0xA797, LowercaseLetter),
        (0xA798, 0xA798, UppercaseLetter),
        (0xA799, 0xA799, LowercaseLetter),
        (0xA79A, 0xA79A, UppercaseLetter),
        (0xA79B, 0xA79B, LowercaseLetter),
        (0xA79C, 0xA79C, UppercaseLetter),
        (0xA79D, 0xA79D, LowercaseLetter),
        (0xA79E, 0xA79E, UppercaseLetter),
        (0xA79F, 0xA79F, LowercaseLetter),
        (0xA7A0, 0xA7A0, UppercaseLetter),
        (0xA7A1, 0xA7A1, LowercaseLetter),
        (0xA7A2, 0xA7A2, UppercaseLetter),
        (0xA7A3, 0xA7A3, LowercaseLetter),
        (0xA7A4, 0xA7A4, UppercaseLetter),
        (0xA7A5, 0xA7A5, LowercaseLetter),
        (0xA7A6, 0xA7A6, UppercaseLetter),
        (0xA7A7, 0xA7A7, LowercaseLetter),
        (0xA7A8, 0xA7A8, UppercaseLetter),
        (0xA7A9, 0xA7A9, LowercaseLetter),
        (0xA7AA, 0xA7AE, UppercaseLetter),
        (0xA7AF, 0xA7AF, LowercaseLetter),
        (0xA7B0, 0xA7B4, UppercaseLetter),
        (0xA7B5, 0xA7B5, LowercaseLetter),
        (0xA7B6, 0xA7B6, UppercaseLetter),
        (0xA7B7, 0xA7B7, LowercaseLetter),
        (0xA7B8, 0xA7B8, UppercaseLetter),
        (0xA7B9, 0xA7B9, LowercaseLetter),
        (0xA7BA, 0xA7BA, UppercaseLetter),
        (0xA7BB, 0xA7BB, LowercaseLetter),
        (0xA7BC, 0xA7BC, UppercaseLetter),
        (0xA7BD, 0xA7BD, LowercaseLetter),
        (0xA7BE, 0xA7BE, UppercaseLetter),
        (0xA7BF, 0xA7BF, LowercaseLetter),
        (0xA7C0, 0xA7C0, UppercaseLetter),
        (0xA7C1, 0xA7C1, LowercaseLetter),
        (0xA7C2, 0xA7C2, UppercaseLetter),
        (0xA7C3, 0xA7C3, LowercaseLetter),
        (0xA7C4, 0xA7C7, UppercaseLetter),
        (0xA7C8, 0xA7C8, LowercaseLetter),
        (0xA7C9, 0xA7C9, UppercaseLetter),
        (0xA7CA, 0xA7CA, LowercaseLetter),
        (0xA7D0, 0xA7D0, UppercaseLetter),
        (0xA7D1, 0xA7D1, LowercaseLetter),
        (0xA7D3, 0xA7D3, LowercaseLetter),
        (0xA7D5, 0xA7D5, LowercaseLetter),
        (0xA7D6, 0xA7D6, UppercaseLetter),
        (0xA7D7, 0xA7D7, LowercaseLetter),
        (0xA7D8, 0xA7D8, UppercaseLetter),
        (0xA7D9, 0xA7D9, LowercaseLetter),
        (0xA7F2, 0xA7F4, ModifierLetter),
        (0xA7F5, 0xA7F5, UppercaseLetter),
        (0xA7F6, 0xA7F6, LowercaseLetter),
        (0xA7F7, 0xA7F7, OtherLetter),
        (0xA7F8, 0xA7F9, ModifierLetter),
        (0xA7FA, 0xA7FA, LowercaseLetter),
        (0xA7FB, 0xA801, OtherLetter),
        (0xA802, 0xA802, NonspacingMark),
        (0xA803, 0xA805, OtherLetter),
        (0xA806, 0xA806, NonspacingMark),
        (0xA807, 0xA80A, OtherLetter),
        (0xA80B, 0xA80B, NonspacingMark),
        (0xA80C, 0xA822, OtherLetter),
        (0xA823, 0xA824, SpacingMark),
        (0xA825, 0xA826, NonspacingMark),
        (0xA827, 0xA827, SpacingMark),
        (0xA828, 0xA82B, OtherSymbol),
        (0xA82C, 0xA82C, NonspacingMark),
        (0xA830, 0xA835, OtherNumber),
        (0xA836, 0xA837, OtherSymbol),
        (0xA838, 0xA838, CurrencySymbol),
        (0xA839, 0xA839, OtherSymbol),
        (0xA840, 0xA873, OtherLetter),
        (0xA874, 0xA877, OtherPunctuation),
        (0xA880, 0xA881, SpacingMark),
        (0xA882, 0xA8B3, OtherLetter),
        (0xA8B4, 0xA8C3, SpacingMark),
        (0xA8C4, 0xA8C5, NonspacingMark),
        (0xA8CE, 0xA8CF, OtherPunctuation),
        (0xA8D0, 0xA8D9, DecimalNumber),
        (0xA8E0, 0xA8F1, NonspacingMark),
        (0xA8F2, 0xA8F7, OtherLetter),
        (0xA8F8, 0xA8FA, OtherPunctuation),
        (0xA8FB, 0xA8FB, OtherLetter),
        (0xA8FC, 0xA8FC, OtherPunctuation),
        (0xA8FD, 0xA8FE, OtherLetter),
        (0xA8FF, 0xA8FF, NonspacingMark),
        (0xA900, 0xA909, DecimalNumber),
        (0xA90A, 0xA925, OtherLetter),
        (0xA926, 0xA92D, NonspacingMark),
        (0xA92E, 0xA92F, OtherPunctuation),
        (0xA930, 0xA946, OtherLetter),
        (0xA947, 0xA951, NonspacingMark),
        (0xA952, 0xA953, SpacingMark),
        (0xA95F, 0xA95F, OtherPunctuation),
        (0xA960, 0xA97C, OtherLetter),
        (0xA980, 0xA982, NonspacingMark),
        (0xA983, 0xA983, SpacingMark),
        (0xA984, 0xA9B2, OtherLetter),
        (0xA9B3, 0xA9B3, NonspacingMark),
        (0xA9B4, 0xA9B5, SpacingMark),
        (0xA9B6, 0xA9B9, NonspacingMark),
        (0xA9BA, 0xA9BB, SpacingMark),
        (0xA9BC, 0xA9BD, NonspacingMark),
        (0xA9BE, 0xA9C0, SpacingMark),
        (0xA9C1, 0xA9CD, OtherPunctuation),
        (0xA9CF, 0xA9CF, ModifierLetter),
        (0xA9D0, 0xA9D9, DecimalNumber),
        (0xA9DE, 0xA9DF, OtherPunctuation),
        (0xA9E0, 0xA9E4, OtherLetter),
        (0xA9E5, 0xA9E5, NonspacingMark),
        (0xA9E6, 0xA9E6, ModifierLetter),
        (0xA9E7, 0xA9EF, OtherLetter),
        (0xA9F0, 0xA9F9, DecimalNumber),
        (0xA9FA, 0xA9FE, OtherLetter),
        (0xAA00, 0xAA28, OtherLetter),
        (0xAA29, 0xAA2E, NonspacingMark),
        (0xAA2F, 0xAA30, SpacingMark),
        (0xAA31, 0xAA32, NonspacingMark),
        (0xAA33, 0xAA34, SpacingMark),
        (0xAA35, 0xAA36, NonspacingMark),
        (0xAA40, 0xAA42, OtherLetter),
        (0xAA43, 0xAA43, NonspacingMark),
        (0xAA44, 0xAA4B, OtherLetter),
        (0xAA4C, 0xAA4C, NonspacingMark),
        (0xAA4D, 0xAA4D, SpacingMark),
        (0xAA50, 0xAA59, DecimalNumber),
        (0xAA5C, 0xAA5F, OtherPunctuation),
        (0xAA60, 0xAA6F, OtherLetter),
        (0xAA70, 0xAA70, ModifierLetter),
        (0xAA71, 0xAA76, OtherLetter),
        (0xAA77, 0xAA79, OtherSymbol),
        (0xAA7A, 0xAA7A, OtherLetter),
        (0xAA7B, 0xAA7B, SpacingMark),
        (0xAA7C, 0xAA7C, NonspacingMark),
        (0xAA7D, 0xAA7D, SpacingMark),
        (0xAA7E, 0xAAAF, OtherLetter),
        (0xAAB0, 0xAAB0, NonspacingMark),
        (0xAAB1, 0xAAB1, OtherLetter),
        (0xAAB2, 0xAAB4, NonspacingMark),
        (0xAAB5, 0xAAB6, OtherLetter),
        (0xAAB7, 0xAAB8, NonspacingMark),
        (0xAAB9, 0xAABD, OtherLetter),
        (0xAABE, 0xAABF, NonspacingMark),
        (0xAAC0, 0xAAC0, OtherLetter),
        (0xAAC1, 0xAAC1, NonspacingMark),
        (0xAAC2, 0xAAC2, OtherLetter),
        (0xAADB, 0xAADC, OtherLetter),
        (0xAADD, 0xAADD, ModifierLetter),
        (0xAADE, 0xAADF, OtherPunctuation),
        (0xAAE0, 0xAAEA, OtherLetter),
        (0xAAEB, 0xAAEB, SpacingMark),
        (0xAAEC, 0xAAED, NonspacingMark),
        (0xAAEE, 0xAAEF, SpacingMark),
        (0xAAF0, 0xAAF1, OtherPunctuation),
        (0xAAF2, 0xAAF2, OtherLetter),
        (0xAAF3, 0xAAF4, ModifierLetter),
        (0xAAF5, 0xAAF5, SpacingMark),
        (0xAAF6, 0xAAF6, NonspacingMark),
        (0xAB01, 0xAB06, OtherLetter),
        (0xAB09, 0xAB0E, OtherLetter),
        (0xAB11, 0xAB16, OtherLetter),
        (0xAB20, 0xAB26, OtherLetter),
        (0xAB28, 0xAB2E, OtherLetter),
        (0xAB30, 0xAB5A, LowercaseLetter),
        (0xAB5B, 0xAB5B, ModifierSymbol),
        (0xAB5C, 0xAB5F, ModifierLetter),
        (0xAB60, 0xAB68, LowercaseLetter),
        (0xAB69, 0xAB69, ModifierLetter),
        (0xAB6A, 0xAB6B, ModifierSymbol),
        (0xAB70, 0xABBF, LowercaseLetter),
        (0xABC0, 0xABE2, OtherLetter),
        (0xABE3, 0xABE4, SpacingMark),
        (0xABE5, 0xABE5, NonspacingMark),
        (0xABE6, 0xABE7, SpacingMark),
        (0xABE8, 0xABE8, NonspacingMark),
        (0xABE9, 0xABEA, SpacingMark),
        (0xABEB, 0xABEB, OtherPunctuation),
        (0xABEC, 0xABEC, SpacingMark),
        (0xABED, 0xABED, NonspacingMark),
        (0xABF0, 0xABF9, DecimalNumber),
        (0xAC00, 0xD7A3, OtherLetter),
        (0xD7B0, 0xD7C6, OtherLetter),
        (0xD7CB, 0xD7FB, OtherLetter),
        (0xD800, 0xDFFF, Surrogate),
        (0xE000, 0xF8FF, PrivateUse),
        (0xF900, 0xFA6D, OtherLetter),
        (0xFA70, 0xFAD9, OtherLetter),
        (0xFB00, 0xFB06, LowercaseLetter),
        (0xFB13, 0xFB17, LowercaseLetter),
        (0xFB1D, 0xFB1D, OtherLetter),
        (0xFB1E, 0xFB1E, NonspacingMark),
        (0xFB1F, 0xFB28, OtherLetter),
        (0xFB29, 0xFB29, MathSymbol),
        (0xFB2A, 0xFB36, OtherLetter),
        (0xFB38, 0xFB3C, OtherLetter),
        (0xFB3E, 0xFB3E, OtherLetter),
        (0xFB40, 0xFB41, OtherLetter),
        (0xFB43, 0xFB44, OtherLetter),
        (0xFB46, 0xFBB1, OtherLetter),
        (0xFBB2, 0xFBC2, ModifierSymbol),
        (0xFBD3, 0xFD3D, OtherLetter),
        (0xFD3E, 0xFD3E, ClosePunctuation),
        (0xFD3F, 0xFD3F, OpenPunctuation),
        (0xFD40, 0xFD4F, OtherSymbol),
        (0xFD50, 0xFD8F, OtherLetter),
        (0xFD92, 0xFDC7, OtherLetter),
        (0xFDCF, 0xFDCF, OtherSymbol),
        (0xFDF0, 0xFDFB, OtherLetter),
        (0xFDFC, 0xFDFC, CurrencySymbol),
        (0xFDFD, 0xFDFF, OtherSymbol),
        (0xFE00, 0xFE0F, NonspacingMark),
        (0xFE10, 0xFE16, OtherPunctuation),
        (0xFE17, 0xFE17, OpenPunctuation),
        (0xFE18, 0xFE18, ClosePunctuation),
        (0xFE19, 0xFE19, OtherPunctuation),
        (0xFE20, 0xFE2F, NonspacingMark),
        (0xFE30, 0xFE30, OtherPunctuation),
        (0xFE31, 0xFE32, DashPunctuation),
        (0xFE33, 0xFE34, ConnectorPunctuation),
        (0xFE35, 0xFE35, OpenPunctuation),
        (0xFE36, 0xFE36, ClosePunctuation),
        (0xFE37, 0xFE37, OpenPunctuation),
        (0xFE38, 0xFE38, ClosePunctuation),
        (0xFE39, 0xFE39, OpenPunctuation),
        (0xFE3A, 0xFE3A, ClosePunctuation),
        (0xFE3B, 0xFE3B, OpenPunctuation),
        (0xFE3C, 0xFE3C, ClosePunctuation),
        (0xFE3D, 0xFE3D, OpenPunctuation),
        (0xFE3E, 0xFE3E, ClosePunctuation),
        (0xFE3F, 0xFE3F, OpenPunctuation),
        (0xFE40, 0xFE40, ClosePunctuation),
        (0xFE41, 0xFE41, OpenPunctuation),
        (0xFE42, 0xFE42, ClosePunctuation),
        (0xFE43, 0xFE43, OpenPunctuation),
        (0xFE44, 0xFE44, ClosePunctuation),
        (0xFE45, 0xFE46, OtherPunctuation),
        (0xFE47, 0xFE47, OpenPunctuation),
        (0xFE48, 0xFE48, ClosePunctuation),
        (0xFE49, 0xFE4C, OtherPunctuation),
        (0xFE4D, 0xFE4F, ConnectorPunctuation),
        (0xFE50, 0xFE52, OtherPunctuation),
        (0xFE54, 0xFE57, OtherPunctuation),
        (0xFE58, 0xFE58, DashPunctuation),
        (0xFE59, 0xFE59, OpenPunctuation),
        (0xFE5A, 0xFE5A, ClosePunctuation),
        (0xFE5B, 0xFE5B, OpenPunctuation),
        (0xFE5C, 0xFE5C, ClosePunctuation),
        (0xFE5D, 0xFE5D, OpenPunctuation),
        (0xFE5E, 0xFE5E, ClosePunctuation),
        (0xFE5F, 0xFE61, OtherPunctuation),
        (0xFE62, 0xFE62, MathSymbol),
        (0xFE63, 0xFE63, DashPunctuation),
        (0xFE64, 0xFE66, MathSymbol),
        (0xFE68, 0xFE68, OtherPunctuation),
        (0xFE69, 0xFE69, CurrencySymbol),
        (0xFE6A, 0xFE6B, OtherPunctuation),
        (0xFE70, 0xFE74, OtherLetter),
        (0xFE76, 0xFEFC, OtherLetter),
        (0xFEFF, 0xFEFF, Format),
        (0xFF01, 0xFF03, OtherPunctuation),
        (0xFF04, 0xFF04, CurrencySymbol),
        (0xFF05, 0xFF07, OtherPunctuation),
        (0xFF08, 0xFF08, OpenPunctuation),
        (0xFF09, 0xFF09, ClosePunctuation),
        (0xFF0A, 0xFF0A, OtherPunctuation),
        (0xFF0B, 0xFF0B, MathSymbol),
        (0xFF0C, 0xFF0C, OtherPunctuation),
        (0xFF0D, 0xFF0D, DashPunctuation),
        (0xFF0E, 0xFF0F, OtherPunctuation),
        (0xFF10, 0xFF19, DecimalNumber),
        (0xFF1A, 0xFF1B, OtherPunctuation),
        (0xFF1C, 0xFF1E, MathSymbol),
        (0xFF1F, 0xFF20, OtherPunctuation),
        (0xFF21, 0xFF3A, UppercaseLetter),
        (0xFF3B, 0xFF3B, OpenPunctuation),
        (0xFF3C, 0xFF3C, OtherPunctuation),
        (0xFF3D, 0xFF3D, ClosePunctuation),
        (0xFF3E, 0xFF3E, ModifierSymbol),
        (0xFF3F, 0xFF3F, ConnectorPunctuation),
        (0xFF40, 0xFF40, ModifierSymbol),
        (0xFF41, 0xFF5A, LowercaseLetter),
        (0xFF5B, 0xFF5B, OpenPunctuation),
        (0xFF5C, 0xFF5C, MathSymbol),
        (0xFF5D, 0xFF5D, ClosePunctuation),
        (0xFF5E, 0xFF5E, MathSymbol),
        (0xFF5F, 0xFF5F, OpenPunctuation),
        (0xFF60, 0xFF60, ClosePunctuation),
        (0xFF61, 0xFF61, OtherPunctuation),
        (0xFF62, 0xFF62, OpenPunctuation),
        (0xFF63, 0xFF63, ClosePunctuation),
        (0xFF64, 0xFF65, OtherPunctuation),
        (0xFF66, 0xFF6F, OtherLetter),
        (0xFF70, 0xFF70, ModifierLetter),
        (0xFF71, 0xFF9D, OtherLetter),
        (0xFF9E, 0xFF9F, ModifierLetter),
        (0xFFA0, 0xFFBE, OtherLetter),
        (0xFFC2, 0xFFC7, OtherLetter),
        (0xFFCA, 0xFFCF, OtherLetter),
        (0xFFD2, 0xFFD7, OtherLetter),
        (0xFFDA, 0xFFDC, OtherLetter),
        (0xFFE0, 0xFFE1, CurrencySymbol),
        (0xFFE2, 0xFFE2, MathSymbol),
        (0xFFE3, 0xFFE3, ModifierSymbol),
        (0xFFE4, 0xFFE4, OtherSymbol),
        (0xFFE5, 0xFFE6, CurrencySymbol),
        (0xFFE8, 0xFFE8, OtherSymbol),
        (0xFFE9, 0xFFEC, MathSymbol),
        (0xFFED, 0xFFEE, OtherSymbol),
        (0xFFF9, 0xFFFB, Format),
        (0xFFFC, 0xFFFD, OtherSymbol),
        (0x10000, 0x1000B, OtherLetter),
        (0x1000D, 0x10026, OtherLetter),
        (0x10028, 0x1003A, OtherLetter),
        (0x1003C, 0x1003D, OtherLetter),
        (0x1003F, 0x1004D, OtherLetter),
        (0x10050, 0x1005D, OtherLetter),
        (0x10080, 0x100FA, OtherLetter),
        (0x10100, 0x10102, OtherPunctuation),
        (0x10107, 0x10133, OtherNumber),
        (0x10137, 0x1013F, OtherSymbol),
        (0x10140, 0x10174, LetterNumber),
        (0x10175, 0x10178, OtherNumber),
        (0x10179, 0x10189, OtherSymbol),
        (0x1018A, 0x1018B, OtherNumber),
        (0x1018C, 0x1018E, OtherSymbol),
        (0x10190, 0x1019C, OtherSymbol),
        (0x101A0, 0x101A0, OtherSymbol),
        (0x101D0, 0x101FC, OtherSymbol),
        (0x101FD, 0x101FD, NonspacingMark),
        (0x10280, 0x1029C, OtherLetter),
        (0x102A0, 0x102D0, OtherLetter),
        (0x102E0, 0x102E0, NonspacingMark),
        (0x102E1, 0x102FB, OtherNumber),
        (0x10300, 0x1031F, OtherLetter),
        (0x10320, 0x10323, OtherNumber),
        (0x1032D, 0x10340, OtherLetter),
        (0x10341, 0x10341, LetterNumber),
        (0x10342, 0x10349, OtherLetter),
        (0x1034A, 0x1034A, LetterNumber),
        (0x10350, 0x10375, OtherLetter),
        (0x10376, 0x1037A, NonspacingMark),
        (0x10380, 0x1039D, OtherLetter),
        (0x1039F, 0x1039F, OtherPunctuation),
        (0x103A0, 0x103C3, OtherLetter),
        (0x103C8, 0x103CF, OtherLetter),
        (0x103D0, 0x103D0, OtherPunctuation),
        (0x103D1, 0x103D5, LetterNumber),
        (0x10400, 0x10427, UppercaseLetter),
        (0x10428, 0x1044F, LowercaseLetter),
        (0x10450, 0x1049D, OtherLetter),
        (0x104A0, 0x104A9, DecimalNumber),
        (0x104B0, 0x104D3, UppercaseLetter),
        (0x104D8, 0x104FB, LowercaseLetter),
        (0x10500, 0x10527, OtherLetter),
        (0x10530, 0x10563, OtherLetter),
        (0x1056F, 0x1056F, OtherPunctuation),
        (0x10570, 0x1057A, UppercaseLetter),
        (0x1057C, 0x1058A, UppercaseLetter),
        (0x1058C, 0x10592, UppercaseLetter),
        (0x10594, 0x10595, UppercaseLetter),
        (0x10597, 0x105A1, LowercaseLetter),
        (0x105A3, 0x105B1, LowercaseLetter),
        (0x105B3, 0x105B9, LowercaseLetter),
        (0x105BB, 0x105BC, LowercaseLetter),
        (0x10600, 0x10736, OtherLetter),
        (0x10740, 0x10755, OtherLetter),
        (0x10760, 0x10767, OtherLetter),
        (0x10780, 0x10785, ModifierLetter),
        (0x10787, 0x107B0, ModifierLetter),
        (0x107B2, 0x107BA, ModifierLetter),
        (0x10800, 0x10805, OtherLetter),
        (0x10808, 0x10808, OtherLetter),
        (0x1080A, 0x10835, OtherLetter),
        (0x10837, 0x10838, OtherLetter),
        (0x1083C, 0x1083C, OtherLetter),
        (0x1083F, 0x10855, OtherLetter),
        (0x10857, 0x10857, OtherPunctuation),
        (0x10858, 0x1085F, OtherNumber),
        (0x10860, 0x10876, OtherLetter),
        (0x10877, 0x10878, OtherSymbol),
        (0x10879, 0x1087F, OtherNumber),
        (0x10880, 0x1089E, OtherLetter),
        (0x108A7, 0x108AF, OtherNumber),
        (0x108E0, 0x108F2, OtherLetter),
        (0x108F4, 0x108F5, OtherLetter),
        (0x108FB, 0x108FF, OtherNumber),
        (0x10900, 0x10915, OtherLetter),
        (0x10916, 0x1091B, OtherNumber),
        (0x1091F, 0x1091F, OtherPunctuation),
        (0x10920, 0x10939, OtherLetter),
        (0x1093F, 0x1093F, OtherPunctuation),
        (0x10980, 0x109B7, OtherLetter),
        (0x109BC, 0x109BD, OtherNumber),
        (0x109BE, 0x109BF, OtherLetter),
        (0x109C0, 0x109CF, OtherNumber),
        (0x109D2, 0x109FF, OtherNumber),
        (0x10A00, 0x10A00, OtherLetter),
        (0x10A01, 0x10A03, NonspacingMark),
        (0x10A05, 0x10A06, NonspacingMark),
        (0x10A0C, 0x10A0F, NonspacingMark),
        (0x10A10, 0x10A13, OtherLetter),
        (0x10A15, 0x10A17, OtherLetter),
        (0x10A19, 0x10A35, OtherLetter),
        (0x10A38, 0x10A3A, NonspacingMark),
        (0x10A3F, 0x10A3F, NonspacingMark),
        (0x10A40, 0x10A48, OtherNumber),
        (0x10A50, 0x10A58, OtherPunctuation),
        (0x10A60, 0x10A7C, OtherLetter),
        (0x10A7D, 0x10A7E, OtherNumber),
        (0x10A7F, 0x10A7F, OtherPunctuation),
        (0x10A80, 0x10A9C, OtherLetter),
        (0x10A9D, 0x10A9F, OtherNumber),
        (0x10AC0, 0x10AC7, OtherLetter),
        (0x10AC8, 0x10AC8, OtherSymbol),
        (0x10AC9, 0x10AE4, OtherLetter),
        (0x10AE5, 0x10AE6, NonspacingMark),
        (0x10AEB, 0x10AEF, OtherNumber),
        (0x10AF0, 0x10AF6, OtherPunctuation),
        (0x10B00, 0x10B35, OtherLetter),
        (0x10B39, 0x10B3F, OtherPunctuation),
        (0x10B40, 0x10B55, OtherLetter),
        (0x10B58, 0x10B5F, OtherNumber),
        (0x10B60, 0x10B72, OtherLetter),
        (0x10B78, 0x10B7F, OtherNumber),
        (0x10B80, 0x10B91, OtherLetter),
        (0x10B99, 0x10B9C, OtherPunctuation),
        (0x10BA9, 0x10BAF, OtherNumber),
        (0x10C00, 0x10C48, OtherLetter),
        (0x10C80, 0x10CB2, UppercaseLetter),
        (0x10CC0, 0x10CF2, LowercaseLetter),
        (0x10CFA, 0x10CFF, OtherNumber),
        (0x10D00, 0x10D23, OtherLetter),
        (0x10D24, 0x10D27, NonspacingMark),
        (0x10D30, 0x10D39, DecimalNumber),
        (0x10E60, 0x10E7E, OtherNumber),
        (0x10E80, 0x10EA9, OtherLetter),
        (0x10EAB, 0x10EAC, NonspacingMark),
        (0x10EAD, 0x10EAD, DashPunctuation),
        (0x10EB0, 0x10EB1, OtherLetter),
        (0x10F00, 0x10F1C, OtherLetter),
        (0x10F1D, 0x10F26, OtherNumber),
        (0x10F27, 0x10F27, OtherLetter),
        (0x10F30, 0x10F45, OtherLetter),
        (0x10F46, 0x10F50, NonspacingMark),
        (0x10F51, 0x10F54, OtherNumber),
        (0x10F55, 0x10F59, OtherPunctuation),
        (0x10F70, 0x10F81, OtherLetter),
        (0x10F82, 0x10F85, NonspacingMark),
        (0x10F86, 0x10F89, OtherPunctuation),
        (0x10FB0, 0x10FC4, OtherLetter),
        (0x10FC5, 0x10FCB, OtherNumber),
        (0x10FE0, 0x10FF6, OtherLetter),
        (0x11000, 0x11000, SpacingMark),
        (0x11001, 0x11001, NonspacingMark),
        (0x11002, 0x11002, SpacingMark),
        (0x11003, 0x11037, OtherLetter),
        (0x11038, 0x11046, NonspacingMark),
        (0x11047, 0x1104D, OtherPunctuation),
        (0x11052, 0x11065, OtherNumber),
        (0x11066, 0x1106F, DecimalNumber),
        (0x11070, 0x11070, NonspacingMark),
        (0x11071, 0x11072, OtherLetter),
        (0x11073, 0x11074, NonspacingMark),
        (0x11075, 0x11075, OtherLetter),
        (0x1107F, 0x11081, NonspacingMark),
        (0x11082, 0x11082, SpacingMark),
        (0x11083, 0x110AF, OtherLetter),
        (0x110B0, 0x110B2, SpacingMark),
        (0x110B3, 0x110B6, NonspacingMark),
        (0x110B7, 0x110B8, SpacingMark),
        (0x110B9, 0x110BA, NonspacingMark),
        (0x110BB, 0x110BC, OtherPunctuation),
        (0x110BD, 0x110BD, Format),
        (0x110BE, 0x110C1, OtherPunctuation),
        (0x110C2, 0x110C2, NonspacingMark),
        (0x110CD, 0x110CD, Format),
        (0x110D0, 0x110E8, OtherLetter),
        (0x110F0, 0x110F9, DecimalNumber),
        (0x11100, 0x11102, NonspacingMark),
        (0x11103, 0x11126, OtherLetter),
        (0x11127, 0x1112B, NonspacingMark),
        (0x1112C, 0x1112C, SpacingMark),
        (0x1112D, 0x11134, NonspacingMark),
        (0x11136, 0x1113F, DecimalNumber),
        (0x11140, 0x11143, OtherPunctuation),
        (0x11144, 0x11144, OtherLetter),
        (0x11145, 0x11146, SpacingMark),
        (0x11147, 0x11147, OtherLetter),
        (0x11150, 0x11172, OtherLetter),
        (0x11173, 0x11173, NonspacingMark),
        (0x11174, 0x11175, OtherPunctuation),
        (0x11176, 0x11176, OtherLetter),
        (0x11180, 0x11181, NonspacingMark),
        (0x11182, 0x11182, SpacingMark),
        (0x11183, 0x111B2, OtherLetter),
        (0x111B3, 0x111B5, SpacingMark),
        (0x111B6, 0x111BE, NonspacingMark),
        (0x111BF, 0x111C0, SpacingMark),
        (0x111C1, 0x111C4, OtherLetter),
        (0x111C5, 0x111C8, OtherPunctuation),
        (0x111C9, 0x111CC, NonspacingMark),
        (0x111CD, 0x111CD, OtherPunctuation),
        (0x111CE, 0x111CE, SpacingMark),
        (0x111CF, 0x111CF, NonspacingMark),
        (0x111D0, 0x111D9, DecimalNumber),
        (0x111DA, 0x111DA, OtherLetter),
        (0x111DB, 0x111DB, OtherPunctuation),
        (0x111DC, 0x111DC, OtherLetter),
        (0x111DD, 0x111DF, OtherPunctuation),
        (0x111E1, 0x111F4, OtherNumber),
        (0x11200, 0x11211, OtherLetter),
        (0x11213, 0x1122B, OtherLetter),
        (0x1122C, 0x1122E, SpacingMark),
        (0x1122F, 0x11231, NonspacingMark),
        (0x11232, 0x11233, SpacingMark),
        (0x11234, 0x11234, NonspacingMark),
        (0x11235, 0x11235, SpacingMark),
        (0x11236, 0x11237, NonspacingMark),
        (0x11238, 0x1123D, OtherPunctuation),
        (0x1123E, 0x1123E, NonspacingMark),
        (0x11280, 0x11286, OtherLetter),
        (0x11288, 0x11288, OtherLetter),
        (0x1128A, 0x1128D, OtherLetter),
        (0x1128F, 0x1129D, OtherLetter),
        (0x1129F, 0x112A8, OtherLetter),
        (0x112A9, 0x112A9, OtherPunctuation),
        (0x112B0, 0x112DE, OtherLetter),
        (0x112DF, 0x112DF, NonspacingMark),
        (0x112E0, 0x112E2, SpacingMark),
        (0x112E3, 0x112EA, NonspacingMark),
        (0x112F0, 0x112F9, DecimalNumber),
        (0x11300, 0x11301, NonspacingMark),
        (0x11302, 0x11303, SpacingMark),
        (0x11305, 0x1130C, OtherLetter),
        (0x1130F, 0x11310, OtherLetter),
        (0x11313, 0x11328, OtherLetter),
        (0x1132A, 0x11330, OtherLetter),
        (0x11332, 0x11333, OtherLetter),
        (0x11335, 0x11339, OtherLetter),
        (0x1133B, 0x1133C, NonspacingMark),
        (0x1133D, 0x1133D, OtherLetter),
        (0x1133E, 0x1133F, SpacingMark),
        (0x11340, 0x11340, NonspacingMark),
        (0x11341, 0x11344, SpacingMark),
        (0x11347, 0x11348, SpacingMark),
        (0x1134B, 0x1134D, SpacingMark),
        (0x11350, 0x11350, OtherLetter),
        (0x11357, 0x11357, SpacingMark),
        (0x1135D, 0x11361, OtherLetter),
        (0x11362, 0x11363, SpacingMark),
        (0x11366, 0x1136C, NonspacingMark),
        (0x11370, 0x11374, NonspacingMark),
        (0x11400, 0x11434, OtherLetter),
        (0x11435, 0x11437, SpacingMark),
        (0x11438, 0x1143F, NonspacingMark),
        (0x11440, 0x11441, SpacingMark),
        (0x11442, 0x11444, NonspacingMark),
        (0x11445, 0x11445, SpacingMark),
        (0x11446, 0x11446, NonspacingMark),
        (0x11447, 0x1144A, OtherLetter),
        (0x1144B, 0x1144F, OtherPunctuation),
        (0x11450, 0x11459, DecimalNumber),
        (0x1145A, 0x1145B, OtherPunctuation),
        (0x1145D, 0x1145D, OtherPunctuation),
        (0x1145E, 0x1145E, NonspacingMark),
        (0x1145F, 0x11461, OtherLetter),
        (0x11480, 0x114AF, OtherLetter),
        (0x114B0, 0x114B2, SpacingMark),
        (0x114B3, 0x114B8, NonspacingMark),
        (0x114B9, 0x114B9, SpacingMark),
        (0x114BA, 0x114BA, NonspacingMark),
        (0x114BB, 0x114BE, SpacingMark),
        (0x114BF, 0x114C0, NonspacingMark),
        (0x114C1, 0x114C1, SpacingMark),
        (0x114C2, 0x114C3, NonspacingMark),
        (0x114C4, 0x114C5, OtherLetter),
        (0x114C6, 0x114C6, OtherPunctuation),
        (0x114C7, 0x114C7, OtherLetter),
        (0x114D0, 0x114D9, DecimalNumber),
        (0x11580, 0x115AE, OtherLetter),
        (0x115AF, 0x115B1, SpacingMark),
        (0x115B2, 0x115B5, NonspacingMark),
        (0x115B8, 0x115BB, SpacingMark),
        (0x115BC, 0x115BD, NonspacingMark),
        (0x115BE, 0x115BE, SpacingMark),
        (0x115BF, 0x115C0, NonspacingMark),
        (0x115C1, 0x115D7, OtherPunctuation),
        (0x115D8, 0x115DB, OtherLetter),
        (0x115DC, 0x115DD, NonspacingMark),
        (0x11600, 0x1162F, OtherLetter),
        (0x11630, 0x11632, SpacingMark),
        (0x11633, 0x1163A, NonspacingMark),
        (0x1163B, 0x1163C, SpacingMark),
        (0x1163D, 0x1163D, NonspacingMark),
        (0x1163E, 0x1163E, SpacingMark),
        (0x1163F, 0x11640, NonspacingMark),
        (0x11641, 0x11643, OtherPunctuation),
        (0x11644, 0x11644, OtherLetter),
        (0x11650, 0x11659, DecimalNumber),
        (0x11660, 0x1166C, OtherPunctuation),
        (0x11680, 0x116AA, OtherLetter),
        (0x116AB, 0x116AB, NonspacingMark),
        (0x116AC, 0x116AC, SpacingMark),
        (0x116AD, 0x116AD, NonspacingMark),
        (0x116AE, 0x116AF, SpacingMark),
        (0x116B0, 0x116B5, NonspacingMark),
        (0x116B6, 0x116B6, SpacingMark),
        (0x116B7, 0x116B7, NonspacingMark),
        (0x116B8, 0x116B8, OtherLetter),
        (0x116B9, 0x116B9, OtherPunctuation),
        (0x116C0, 0x116C9, DecimalNumber),
        (0x11700, 0x1171A, OtherLetter),
        (0x1171D, 0x1171F, NonspacingMark),
        (0x11720, 0x11721, SpacingMark),
        (0x11722, 0x11725, NonspacingMark),
        (0x11726, 0x11726, SpacingMark),
        (0x11727, 0x1172B, NonspacingMark),
        (0x11730, 0x11739, DecimalNumber),
        (0x1173A, 0x1173B, OtherNumber),
        (0x1173C, 0x1173E, OtherPunctuation),
        (0x1173F, 0x1173F, OtherSymbol),
        (0x11740, 0x11746, OtherLetter),
        (0x11800, 0x1182B, OtherLetter),
        (0x1182C, 0x1182E, SpacingMark),
        (0x1182F, 0x11837, NonspacingMark),
        (0x11838, 0x11838, SpacingMark),
        (0x11839, 0x1183A, NonspacingMark),
        (0x1183B, 0x1183B, OtherPunctuation),
        (0x118A0, 0x118BF, UppercaseLetter),
        (0x118C0, 0x118DF, LowercaseLetter),
        (0x118E0, 0x118E9, DecimalNumber),
        (0x118EA, 0x118F2, OtherNumber),
        (0x118FF, 0x11906, OtherLetter),
        (0x11909, 0x11909, OtherLetter),
        (0x1190C, 0x11913, OtherLetter),
        (0x11915, 0x11916, OtherLetter),
        (0x11918, 0x1192F, OtherLetter),
        (0x11930, 0x11935, SpacingMark),
        (0x11937, 0x11938, SpacingMark),
        (0x1193B, 0x1193C, NonspacingMark),
        (0x1193D, 0x1193D, SpacingMark),
        (0x1193E, 0x1193E, NonspacingMark),
        (0x1193F, 0x1193F, OtherLetter),
        (0x11940, 0x11940, SpacingMark),
        (0x11941, 0x11941, OtherLetter),
        (0x11942, 0x11942, SpacingMark),
        (0x11943, 0x11943, NonspacingMark),
        (0x11944, 0x11946, OtherPunctuation),
        (0x11950, 0x11959, DecimalNumber),
        (0x119A0, 0x119A7, OtherLetter),
        (0x119AA, 0x119D0, OtherLetter),
        (0x119D1, 0x119D3, SpacingMark),
        (0x119D4, 0x119D7, NonspacingMark),
        (0x119DA, 0x119DB, NonspacingMark),
        (0x119DC, 0x119DF, SpacingMark),
        (0x119E0, 0x119E0, NonspacingMark),
        (0x119E1, 0x119E1, OtherLetter),
        (0x119E2, 0x119E2, OtherPunctuation),
        (0x119E3, 0x119E3, OtherLetter),
        (0x119E4, 0x119E4, SpacingMark),
        (0x11A00, 0x11A00, OtherLetter),
        (0x11A01, 0x11A0A, NonspacingMark),
        (0x11A0B, 0x11A32, OtherLetter),
        (0x11A33, 0x11A38, NonspacingMark),
        (0x11A39, 0x11A39, SpacingMark),
        (0x11A3A, 0x11A3A, OtherLetter),
        (0x11A3B, 0x11A3E, NonspacingMark),
        (0x11A3F, 0x11A46, OtherPunctuation),
        (0x11A47, 0x11A47, NonspacingMark),
        (0x11A50, 0x11A50, OtherLetter),
        (0x11A51, 0x11A56, NonspacingMark),
        (0x11A57, 0x11A58, SpacingMark),
        (0x11A59, 0x11A5B, NonspacingMark),
        (0x11A5C, 0x11A89, OtherLetter),
        (0x11A8A, 0x11A96, NonspacingMark),
        (0x11A97, 0x11A97, SpacingMark),
        (0x11A98, 0x11A99, NonspacingMark),
        (0x11A9A, 0x11A9C, OtherPunctuation),
        (0x11A9D, 0x11A9D, OtherLetter),
        (0x11A9E, 0x11AA2, OtherPunctuation),
        (0x11AB0, 0x11AF8, OtherLetter),
        (0x11C00, 0x11C08, OtherLetter),
        (0x11C0A, 0x11C2E, OtherLetter),
        (0x11C2F, 0x11C2F, SpacingMark),
        (0x11C30, 0x11C36, NonspacingMark),
        (0x11C38, 0x11C3D, NonspacingMark),
        (0x11C3E, 0x11C3E, SpacingMark),
        (0x11C3F, 0x11C3F, NonspacingMark),
        (0x11C40, 0x11C40, OtherLetter),
        (0x11C41, 0x11C45, OtherPunctuation),
        (0x11C50, 0x11C59, DecimalNumber),
        (0x11C5A, 0x11C6C, OtherNumber),
        (0x11C70, 0x11C71, OtherPunctuation),
        (0x11C72, 0x11C8F, OtherLetter),
        (0x11C92, 0x11CA7, NonspacingMark),
        (0x11CA9, 0x11CA9, SpacingMark),
        (0x11CAA, 0x11CB0, NonspacingMark),
        (0x11CB1, 0x11CB1, SpacingMark),
        (0x11CB2, 0x11CB3, NonspacingMark),
        (0x11CB4, 0x11CB4, SpacingMark),
        (0x11CB5, 0x11CB6, NonspacingMark),
        (0x11D00, 0x11D06, OtherLetter),
        (0x11D08, 0x11D09, OtherLetter),
        (0x11D0B, 0x11D30, OtherLetter),
        (0x11D31, 0x11D36, NonspacingMark),
        (0x11D3A, 0x11D3A, NonspacingMark),
        (0x11D3C, 0x11D3D, NonspacingMark),
        (0x11D3F, 0x11D45, NonspacingMark),
        (0x11D46, 0x11D46, OtherLetter),
        (0x11D47, 0x11D47, NonspacingMark),
        (0x11D50, 0x11D59, DecimalNumber),
        (0x11D60, 0x11D65, OtherLetter),
        (0x11D67, 0x11D68, OtherLetter),
        (0x11D6A, 0x11D89, OtherLetter),
        (0x11D8A, 0x11D8E, SpacingMark),
        (0x11D90, 0x11D91, NonspacingMark),
        (0x11D93, 0x11D94, SpacingMark),
        (0x11D95, 0x11D95, NonspacingMark),
        (0x11D96, 0x11D96, SpacingMark),
        (0x11D97, 0x11D97, NonspacingMark),
        (0x11D98, 0x11D98, OtherLetter),
        (0x11DA0, 0x11DA9, DecimalNumber),
        (0x11EE0, 0x11EF2, OtherLetter),
        (0x11EF3, 0x11EF4, NonspacingMark),
        (0x11EF5, 0x11EF6, SpacingMark),
        (0x11EF7, 0x11EF8, OtherPunctuation),
        (0x11FB0, 0x11FB0, OtherLetter),
        (0x11FC0, 0x11FD4, OtherNumber),
        (0x11FD5, 0x11FDC, OtherSymbol),
        (0x11FDD, 0x11FE0, CurrencySymbol),
        (0x11FE1, 0x11FF1, OtherSymbol),
        (0x11FFF, 0x11FFF, OtherPunctuation),
        (0x12000, 0x12399, OtherLetter),
        (0x12400, 0x1246E, LetterNumber),
        (0x12470, 0x12474, OtherPunctuation),
        (0x12480, 0x12543, OtherLetter),
        (0x12F90, 0x12FF0, OtherLetter),
        (0x12FF1, 0x12FF2, OtherPunctuation),
        (0x13000, 0x1342E, OtherLetter),
        (0x13430, 0x13438, Format),
        (0x14400, 0x14646, OtherLetter),
        (0x16800, 0x16A38, OtherLetter),
        (0x16A40, 0x16A5E, OtherLetter),
        (0x16A60, 0x16A69, DecimalNumber),
        (0x16A6E, 0x16A6F, OtherPunctuation),
        (0x16A70, 0x16ABE, OtherLetter),
        (0x16AC0, 0x16AC9, DecimalNumber),
        (0x16AD0, 0x16AED, OtherLetter),
        (0x16AF0, 0x16AF4, NonspacingMark),
        (0x16AF5, 0x16AF5, OtherPunctuation),
        (0x16B00, 0x16B2F, OtherLetter),
        (0x16B30, 0x16B36, NonspacingMark),
        (0x16B37, 0x16B3B, OtherPunctuation),
        (0x16B3C, 0x16B3F, OtherSymbol),
        (0x16B40, 0x16B43, ModifierLetter),
        (0x16B44, 0x16B44, OtherPunctuation),
        (0x16B45, 0x16B45, OtherSymbol),
        (0x16B50, 0x16B59, DecimalNumber),
        (0x16B5B, 0x16B61, OtherNumber),
        (0x16B63, 0x16B77, OtherLetter),
        (0x16B7D, 0x16B8F, OtherLetter),
        (0x16E40, 0x16E5F, UppercaseLetter),
        (0x16E60, 0x16E7F, LowercaseLetter),
        (0x16E80, 0x16E96, OtherNumber),
        (0x16E97, 0x16E9A, OtherPunctuation),
        (0x16F00, 0x16F4A, OtherLetter),
        (0x16F4F, 0x16F4F, NonspacingMark),
        (0x16F50, 0x16F50, OtherLetter),
        (0x16F51, 0x16F87, SpacingMark),
        (0x16F8F, 0x16F92, NonspacingMark),
        (0x16F93, 0x16F9F, ModifierLetter),
        (0x16FE0, 0x16FE1, ModifierLetter),
        (0x16FE2, 0x16FE2, OtherPunctuation),
        (0x16FE3, 0x16FE3, ModifierLetter),
        (0x16FE4, 0x16FE4, NonspacingMark),
        (0x16FF0, 0x16FF1, SpacingMark),
        (0x17000, 0x187F7, OtherLetter),
        (0x18800, 0x18CD5, OtherLetter),
        (0x18D00, 0x18D08, OtherLetter),
        (0x1AFF0, 0x1AFF3, ModifierLetter),
        (0x1AFF5, 0x1AFFB, ModifierLetter),
        (0x1AFFD, 0x1AFFE, ModifierLetter),
        (0x1B000, 0x1B122, OtherLetter),
        (0x1B150, 0x1B152, OtherLetter),
        (0x1B164, 0x1B167, OtherLetter),
        (0x1B170, 0x1B2FB, OtherLetter),
        (0x1BC00, 0x1BC6A, OtherLetter),
        (0x1BC70, 0x1BC7C, OtherLetter),
        (0x1BC80, 0x1BC88, OtherLetter),
        (0x1BC90, 0x1BC99, OtherLetter),
        (0x1BC9C, 0x1BC9C, OtherSymbol),
        (0x1BC9D, 0x1BC9E, NonspacingMark),
        (0x1BC9F, 0x1BC9F, OtherPunctuation),
        (0x1BCA0, 0x1BCA3, Format),
        (0x1CF00, 0x1CF2D, NonspacingMark),
        (0x1CF30, 0x1CF46, NonspacingMark),
        (0x1CF50, 0x1CFC3, OtherSymbol),
        (0x1D000, 0x1D0F5, OtherSymbol),
        (0x1D100, 0x1D126, OtherSymbol),
        (0x1D129, 0x1D164, OtherSymbol),
        (0x1D165, 0x1D166, SpacingMark),
        (0x1D167, 0x1D169, NonspacingMark),
        (0x1D16A, 0x1D16C, OtherSymbol),
        (0x1D16D, 0x1D172, SpacingMark),
        (0x1D173, 0x1D17A, Format),
        (0x1D17B, 0x1D182, NonspacingMark),
        (0x1D183, 0x1D184, OtherSymbol),
        (0x1D185, 0x1D18B, NonspacingMark),
        (0x1D18C, 0x1D1A9, OtherSymbol),
        (0x1D1AA, 0x1D1AD, NonspacingMark),
        (0x1D1AE, 0x1D1EA, OtherSymbol),
        (0x1D200, 0x1D241, OtherSymbol),
        (0x1D242, 0x1D244, NonspacingMark),
        (0x1D245, 0x1D245, OtherSymbol),
        (0x1D2E0, 0x1D2F3, OtherNumber),
        (0x1D300, 0x1D356, OtherSymbol),
        (0x1D360, 0x1D378, OtherNumber),
        (0x1D400, 0x1D419, UppercaseLetter),
        (0x1D41A, 0x1D433, LowercaseLetter),
        (0x1D434, 0x1D44D, UppercaseLetter),
        (0x1D44E, 0x1D454, LowercaseLetter),
        (0x1D456, 0x1D467, LowercaseLetter),
        (0x1D468, 0x1D481, UppercaseLetter),
        (0x1D482, 0x1D49B, LowercaseLetter),
        (0x1D49C, 0x1D49C, UppercaseLetter),
        (0x1D49E, 0x1D49F, UppercaseLetter),
        (0x1D4A2, 0x1D4A2, UppercaseLetter),
        (0x1D4A5, 0x1D4A6, UppercaseLetter),
        (0x1D4A9, 0x1D4AC, UppercaseLetter),
        (0x1D4AE, 0x1D4B5, UppercaseLetter),
        (0x1D4B6, 0x1D4B9, LowercaseLetter),
        (0x1D4BB, 0x1D4BB, LowercaseLetter),
        (0x1D4BD, 0x1D4C3, LowercaseLetter),
        (0x1D4C5, 0x1D4CF, LowercaseLetter),
        (0x1D4D0, 0x1D4E9, UppercaseLetter),
        (0x1D4EA, 0x1D503, LowercaseLetter),
        (0x1D504, 0x1D505, UppercaseLetter),
        (0x1D507, 0x1D50A, UppercaseLetter),
        (0x1D50D, 0x1D514, UppercaseLetter),
        (0x1D516, 0x1D51C, UppercaseLetter),
        (0x1D51E, 0x1D537, LowercaseLetter),
        (0x1D538, 0x1D539, UppercaseLetter),
        (0x1D53B, 0x1D53E, UppercaseLetter),
        (0x1D540, 0x1D544, UppercaseLetter),
        (0x1D546, 0x1D546, UppercaseLetter),
        (0x1D54A, 0x1D550, UppercaseLetter),
        (0x1D552, 0x1D56B, LowercaseLetter),
        (0x1D56C, 0x1D585, UppercaseLetter),
        (0x1D586, 0x1D59F, LowercaseLetter),
        (0x1D5A0, 0x1D5B9, UppercaseLetter),
        (0x1D5BA, 0x1D5D3, LowercaseLetter),
        (0x1D5D4, 0x1D5ED, UppercaseLetter),
        (0x1D5EE, 0x1D607, LowercaseLetter),
        (0x1D608, 0x1D621, UppercaseLetter),
        (0x1D622, 0x1D63B, LowercaseLetter),
        (0x1D63C, 0x1D655, UppercaseLetter),
        (0x1D656, 0x1D66F, LowercaseLetter),
        (0x1D670, 0x1D689, UppercaseLetter),
        (0x1D68A, 0x1D6A5, LowercaseLetter),
        (0x1D6A8, 0x1D6C0, UppercaseLetter),
        (0x1D6C1, 0x1D6C1, MathSymbol),
        (0x1D6C2, 0x1D6DA, LowercaseLetter),
        (0x1D6DB, 0x1D6DB, MathSymbol),
        (0x1D6DC, 0x1D6E1, LowercaseLetter),
        (0x1D6E2, 0x1D6FA, UppercaseLetter),
        (0x1D6FB, 0x1D6FB, MathSymbol),
        (0x1D6FC, 0x1D714, LowercaseLetter),
        (0x1D715, 0x1D715, MathSymbol),
        (0x1D716, 0x1D71B, LowercaseLetter),
        (0x1D71C, 0x1D734, UppercaseLetter),
        (0x1D735, 0x1D735, MathSymbol),
        (0x1D736, 0x1D74E, LowercaseLetter),
        (0x1D74F, 0x1D74F, MathSymbol),
        (0x1D750, 0x1D755, LowercaseLetter),
        (0x1D756, 0x1D76E, UppercaseLetter),
        (0x1D76F, 0x1D76F, MathSymbol),
        (0x1D770, 0x1D788, LowercaseLetter),
        (0x1D789, 0x1D789, MathSymbol),
        (0x1D78A, 0x1D78F, LowercaseLetter),
        (0x1D790, 0x1D7A8, UppercaseLetter),
        (0x1D7A9, 0x1D7A9, MathSymbol),
        (0x1D7AA, 0x1D7C2, LowercaseLetter),
        (0x1D7C3, 0x1D7C3, MathSymbol),
        (0x1D7C4, 0x1D7C9, LowercaseLetter),
        (0x1D7CA, 0x1D7CA, UppercaseLetter),
        (0x1D7CB, 0x1D7CB, LowercaseLetter),
        (0x1D7CE, 0x1D7FF, DecimalNumber),
        (0x1D800, 0x1D9FF, OtherSymbol),
        (0x1DA00, 0x1DA36, NonspacingMark),
        (0x1DA37, 0x1DA3A, OtherSymbol),
        (0x1DA3B, 0x1DA6C, NonspacingMark),
        (0x1DA6D, 0x1DA74, OtherSymbol),
        (0x1DA75, 0x1DA75, NonspacingMark),
        (0x1DA76, 0x1DA83, OtherSymbol),
        (0x1DA84, 0x1DA84, NonspacingMark),
        (0x1DA85, 0x1DA86, OtherSymbol),
        (0x1DA87, 0x1DA8B, OtherPunctuation),
        (0x1DA9B, 0x1DA9F, NonspacingMark),
        (0x1DAA1, 0x1DAAF, NonspacingMark),
        (0x1DF00, 0x1DF09, LowercaseLetter),
        (0x1DF0A, 0x1DF0A, OtherLetter),
        (0x1DF0B, 0x1DF1E, LowercaseLetter),
        (0x1E000, 0x1E006, NonspacingMark),
        (0x1E008, 0x1E018, NonspacingMark),
        (0x1E01B, 0x1E021, NonspacingMark),
        (0x1E023, 0x1E024, NonspacingMark),
        (0x1E026, 0x1E02A, NonspacingMark),
        (0x1E100, 0x1E12C, OtherLetter),
        (0x1E130, 0x1E136, NonspacingMark),
        (0x1E137, 0x1E13D, ModifierLetter),
        (0x1E140, 0x1E149, DecimalNumber),
        (0x1E14E, 0x1E14E, OtherLetter),
        (0x1E14F, 0x1E14F, OtherSymbol),
        (0x1E290, 0x1E2AD, OtherLetter),
        (0x1E2AE, 0x1E2AE, NonspacingMark),
        (0x1E2C0, 0x1E2EB, OtherLetter),
        (0x1E2EC, 0x1E2EF, NonspacingMark),
        (0x1E2F0, 0x1E2F9, DecimalNumber),
        (0x1E2FF, 0x1E2FF, CurrencySymbol),
        (0x1E7E0, 0x1E7E6, OtherLetter),
        (0x1E7E8, 0x1E7EB, OtherLetter),
        (0x1E7ED, 0x1E7EE, OtherLetter),
        (0x1E7F0, 0x1E7FE, OtherLetter),
        (0x1E800, 0x1E8C4, OtherLetter),
        (0x1E8C7, 0x1E8CF, OtherNumber),
        (0x1E8D0, 0x1E8D6, NonspacingMark),
        (0x1E900, 0x1E921, UppercaseLetter),
        (0x1E922, 0x1E943, LowercaseLetter),
        (0x1E944, 0x1E94A, NonspacingMark),
        (0x1E94B, 0x1E94B, ModifierLetter),
        (0x1E950, 0x1E959, DecimalNumber),
        (0x1E95E, 0x1E95F, OtherPunctuation),
        (0x1EC71, 0x1ECAB, OtherNumber),
        (0x1ECAC, 0x1ECAC, OtherSymbol),
        (0x1ECAD, 0x1ECAF, OtherNumber),
        (0x1ECB0, 0x1ECB0, CurrencySymbol),
        (0x1ECB1, 0x1ECB4, OtherNumber),
        (0x1ED01, 0x1ED2D, OtherNumber),
        (0x1ED2E, 0x1ED2E, OtherSymbol),
        (0x1ED2F, 0x1ED3D, OtherNumber),
        (0x1EE00, 0x1EE03, OtherLetter),
        (0x1EE05, 0x1EE1F, OtherLetter),
        (0x1EE21, 0x1EE22, OtherLetter),
        (0x1EE24, 0x1EE24, OtherLetter),
        (0x1EE27, 0x1EE27, OtherLetter),
        (0x1EE29, 0x1EE32, OtherLetter),
        (0x1EE34, 0x1EE37, OtherLetter),
        (0x1EE39, 0x1EE39, OtherLetter),
        (0x1EE3B, 0x1EE3B, OtherLetter),
        (0x1EE42, 0x1EE42, OtherLetter),
        (0x1EE47, 0x1EE47, OtherLetter),
        (0x1EE49, 0x1EE49, OtherLetter),
        (0x1EE4B, 0x1EE4B, OtherLetter),
        (0x1EE4D, 0x1EE4F, OtherLetter),
        (0x1EE51, 0x1EE52, OtherLetter),
        (0x1EE54, 0x1EE54, OtherLetter),
        (0x1EE57, 0x1EE57, OtherLetter),
        (0x1EE59, 0x1EE59, OtherLetter),
        (0x1EE5B, 0x1EE5B, OtherLetter),
        (0x1EE5D, 0x1EE5D, OtherLetter),
        (0x1EE5F, 0x1EE5F, OtherLetter),
        (0x1EE61, 0x1EE62, OtherLetter),
        (0x1EE64, 0x1EE64, OtherLetter),
        (0x1EE67, 0x1EE6A, OtherLetter),
        (0x1EE6C, 0x1EE72, OtherLetter),
        (0x1EE74, 0x1EE77, OtherLetter),
        (0x1EE79, 0x1EE7C, OtherLetter),
        (0x1EE7E, 0x1EE7E, OtherLetter),
        (0x1EE80, 0x1EE89, OtherLetter),
        (0x1EE8B, 0x1EE9B, OtherLetter),
        (0x1EEA1, 0x1EEA3, OtherLetter),
        (0x1EEA5, 0x1EEA9, OtherLetter),
        (0x1EEAB, 0x1EEBB, OtherLetter),
        (0x1EEF0, 0x1EEF1, MathSymbol),
        (0x1F000, 0x1F02B, OtherSymbol),
        (0x1F030, 0x1F093, OtherSymbol),
        (0x1F0A0, 0x1F0AE, OtherSymbol),
        (0x1F0B1, 0x1F0BF, OtherSymbol),
        (0x1F0C1, 0x1F0CF, OtherSymbol),
        (0x1F0D1, 0x1F0F5, OtherSymbol),
        (0x1F100, 0x1F10C, OtherNumber),
        (0x1F10D, 0x1F1AD, OtherSymbol),
        (0x1F1E6, 0x1F202, OtherSymbol),
        (0x1F210, 0x1F23B, OtherSymbol),
        (0x1F240, 0x1F248, OtherSymbol),
        (0x1F250, 0x1F251, OtherSymbol),
        (0x1F260, 0x1F265, OtherSymbol),
        (0x1F300, 0x1F3FA, OtherSymbol),
        (0x1F3FB, 0x1F3FF, ModifierSymbol),
        (0x1F400, 0x1F6D7, OtherSymbol),
        (0x1F6DD, 0x1F6EC, OtherSymbol),
        (0x1F6F0, 0x1F6FC, OtherSymbol),
        (0x1F700, 0x1F773, OtherSymbol),
        (0x1F780, 0x1F7D8, OtherSymbol),
        (0x1F7E0, 0x1F7EB, OtherSymbol),
        (0x1F7F0, 0x1F7F0, OtherSymbol),
        (0x1F800, 0x1F80B, OtherSymbol),
        (0x1F810, 0x1F847, OtherSymbol),
        (0x1F850, 0x1F859, OtherSymbol),
        (0x1F860, 0x1F887, OtherSymbol),
        (0x1F890, 0x1F8AD, OtherSymbol),
        (0x1F8B0, 0x1F8B1, OtherSymbol),
        (0x1F900, 0x1FA53, OtherSymbol),
        (0x1FA60, 0x1FA6D, OtherSymbol),
        (0x1FA70, 0x1FA74, OtherSymbol),
        (0x1FA78, 0x1FA7C, OtherSymbol),
        (0x1FA80, 0x1FA86, OtherSymbol),
        (0x1FA90, 0x1FAAC, OtherSymbol),
        (0x1FAB0, 0x1FABA, OtherSymbol),
        (0x1FAC0, 0x1FAC5, OtherSymbol),
        (0x1FAD0, 0x1FAD9, OtherSymbol),
        (0x1FAE0, 0x1FAE7, OtherSymbol),
        (0x1FAF0, 0x1FAF6, OtherSymbol),
        (0x1FB00, 0x1FB92, OtherSymbol),
        (0x1FB94, 0x1FBCA, OtherSymbol),
        (0x1FBF0, 0x1FBF9, DecimalNumber),
        (0x20000, 0x2A6DF, OtherLetter),
        (0x2A700, 0x2B738, OtherLetter),
        (0x2B740, 0x2B81D, OtherLetter),
        (0x2B820, 0x2CEA1, OtherLetter),
        (0x2CEB0, 0x2EBE0, OtherLetter),
        (0x2F800, 0x2FA1D, OtherLetter),
        (0x30000, 0x3134A, OtherLetter),
        (0xE0001, 0xE0001, Format),
        (0xE0020, 0xE007F, Format),
        (0xE0100, 0xE01EF, NonspacingMark),
        (0xF0000, 0xFFFFD, PrivateUse),
        (0x100000, 0x10FFFD, PrivateUse),
    ];

    pub(crate) const GENERAL_CATEGORY_NAMES: &[(&str, GeneralCategory)] = &[
        ("cc", Control),
        ("cf", Format),
        ("closepunctuation", ClosePunctuation),
        ("cn", Unassigned),
        ("cntrl", Control),
        ("co", PrivateUse),
        ("connectorpunctuation", ConnectorPunctuation),
        ("control", Control),
        ("cs", Surrogate),
        ("currencysymbol", CurrencySymbol),
        ("dashpunctuation", DashPunctuation),
        ("decimalnumber", DecimalNumber),
        ("digit", DecimalNumber),
        ("enclosingmark", EnclosingMark),
        ("finalpunctuation", FinalPunctuation),
        ("format", Format),
        ("initialpunctuation", InitialPunctuation),
        ("letternumber", LetterNumber),
        ("lineseparator", LineSeparator),
        ("ll", LowercaseLetter),
        ("lm", ModifierLetter),
        ("lo", OtherLetter),
        ("lowercaseletter", LowercaseLetter),
        ("lt", TitlecaseLetter),
        ("lu", UppercaseLetter),
        ("mathsymbol", MathSymbol),
        ("mc", SpacingMark),
        ("me", EnclosingMark),
        ("mn", NonspacingMark),
        ("modifierletter", ModifierLetter),
        ("modifiersymbol", ModifierSymbol),
        ("nd", DecimalNumber),
        ("nl", LetterNumber),
        ("no", OtherNumber),
        ("nonspacingmark", NonspacingMark),
        ("openpunctuation", OpenPunctuation),
        ("otherletter", OtherLetter),
        ("othernumber", OtherNumber),
        ("otherpunctuation", OtherPunctuation),
        ("othersymbol", OtherSymbol),
        ("paragraphseparator", ParagraphSeparator),
        ("pc", ConnectorPunctuation),
        ("pd", DashPunctuation),
        ("pe", ClosePunctuation),
        ("pf", FinalPunctuation),
        ("pi", InitialPunctuation),
        ("po", OtherPunctuation),
        ("privateuse", PrivateUse),
        ("ps", OpenPunctuation),
        ("sc", CurrencySymbol),
        ("sk", ModifierSymbol),
        ("sm", MathSymbol),
        ("so", OtherSymbol),
        ("spaceseparator", SpaceSeparator),
        ("spacingmark", SpacingMark),
        ("surrogate", Surrogate),
        ("titlecaseletter", TitlecaseLetter),
        ("unassigned", Unassigned),
        ("uppercaseletter", UppercaseLetter),
        ("zl", LineSeparator),
        ("zp", ParagraphSeparator),
        ("zs", SpaceSeparator),
    ];
}

pub(crate) mod script {
    /// Values of the Script property.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Script {
        /// Adlam (`Adlm`)
        Adlam,
        /// Ahom (`Ahom`)
        Ahom,
        /// Anatolian_Hieroglyphs (`Hluw`)
        AnatolianHieroglyphs,
        /// Arabic (`Arab`)
        Arabic,
        /// Armenian (`Armn`)
        Armenian,
        /// Avestan (`Avst`)
        Avestan,
        /// Balinese (`Bali`)
        Balinese,
        /// Bamum (`Bamu`)
        Bamum,
        /// Bassa_Vah (`Bass`)
        BassaVah,
        /// Batak (`Batk`)
        Batak,
        /// Bengali (`Beng`)
        Bengali,
        /// Bhaiksuki (`Bhks`)
        Bhaiksuki,
        /// Bopomofo (`Bopo`)
        Bopomofo,
        /// Brahmi (`Brah`)
        Brahmi,
        /// Braille (`Brai`)
        Braille,
        /// Buginese (`Bugi`)
        Buginese,
        /// Buhid (`Buhd`)
        Buhid,
        /// Canadian_Aboriginal (`Cans`)
        CanadianAboriginal,
        /// Carian (`Cari`)
        Carian,
        /// Caucasian_Albanian (`Aghb`)
        CaucasianAlbanian,
        /// Chakma (`Cakm`)
        Chakma,
        /// Cham (`Cham`)
        Cham,
        /// Cherokee (`Cher`)
        Cherokee,
        /// Chorasmian (`Chrs`)
        Chorasmian,
        /// Common (`Zyyy`)
        Common,
        /// Coptic (`Copt`)
        Coptic,
        /// Cuneiform (`Xsux`)
        Cuneiform,
        /// Cypriot (`Cprt`)
        Cypriot,
        /// Cypro_Minoan (`Cpmn`)
        CyproMinoan,
        /// Cyrillic (`Cyrl`)
        Cyrillic,
        /// Deseret (`Dsrt`)
        Deseret,
        /// Devanagari (`Deva`)
        Devanagari,
        /// Dives_Akuru (`Diak`)
        DivesAkuru,
        /// Dogra (`Dogr`)
        Dogra,
        /// Duployan (`Dupl`)
        Duployan,
        /// Egyptian_Hieroglyphs (`Egyp`)
        EgyptianHieroglyphs,
        /// Elbasan (`Elba`)
        Elbasan,
        /// Elymaic (`Elym`)
        Elymaic,
        /// Ethiopic (`Ethi`)
        Ethiopic,
        /// Georgian (`Geor`)
        Georgian,
        /// Glagolitic (`Glag`)
        Glagolitic,
        /// Gothic (`Goth`)
        Gothic,
        /// Grantha (`Gran`)
        Grantha,
        /// Greek (`Grek`)
        Greek,
        /// Gujarati (`Gujr`)
        Gujarati,
        /// Gunjala_Gondi (`Gong`)
        GunjalaGondi,
        /// Gurmukhi (`Guru`)
        Gurmukhi,
        /// Han (`Hani`)
        Han,
        /// Hangul (`Hang`)
        Hangul,
        /// Hanifi_Rohingya (`Rohg`)
        HanifiRohingya,
        /// Hanunoo (`Hano`)
        Hanunoo,
        /// Hatran (`Hatr`)
        Hatran,
        /// Hebrew (`Hebr`)
        Hebrew,
        /// Hiragana (`Hira`)
        Hiragana,
        /// Imperial_Aramaic (`Armi`)
        ImperialAramaic,
        /// Inherited (`Zinh`)
        Inherited,
        /// Inscriptional_Pahlavi (`Phli`)
        InscriptionalPahlavi,
        /// Inscriptional_Parthian (`Prti`)
        InscriptionalParthian,
        /// Javanese (`Java`)
        Javanese,
        /// Kaithi (`Kthi`)
        Kaithi,
        /// Kannada (`Knda`)
        Kannada,
        /// Katakana (`Kana`)
        Katakana,
        /// Kayah_Li (`Kali`)
        KayahLi,
        /// Kharoshthi (`Khar`)
        Kharoshthi,
        /// Khitan_Small_Script (`Kits`)
        KhitanSmallScript,
        /// Khmer (`Khmr`)
        Khmer,
        /// Khojki (`Khoj`)
        Khojki,
        /// Khudawadi (`Sind`)
        Khudawadi,
        /// Lao (`Laoo`)
        Lao,
        /// Latin (`Latn`)
        Latin,
        /// Lepcha (`Lepc`)
        Lepcha,
        /// Limbu (`Limb`)
        Limbu,
        /// Linear_A (`Lina`)
        LinearA,
        /// Linear_B (`Linb`)
        LinearB,
        /// Lisu (`Lisu`)
        Lisu,
        /// Lycian (`Lyci`)
        Lycian,
        /// Lydian (`Lydi`)
        Lydian,
        /// Mahajani (`Mahj`)
        Mahajani,
        /// Makasar (`Maka`)
        Makasar,
        /// Malayalam (`Mlym`)
        Malayalam,
        /// Mandaic (`Mand`)
        Mandaic,
        /// Manichaean (`Mani`)
        Manichaean,
        /// Marchen (`Marc`)
        Marchen,
        /// Masaram_Gondi (`Gonm`)
        MasaramGondi,
        /// Medefaidrin (`Medf`)
        Medefaidrin,
        /// Meetei_Mayek (`Mtei`)
        MeeteiMayek,
        /// Mende_Kikakui (`Mend`)
        MendeKikakui,
        /// Meroitic_Cursive (`Merc`)
        MeroiticCursive,
        /// Meroitic_Hieroglyphs (`Mero`)
        MeroiticHieroglyphs,
        /// Miao (`Plrd`)
        Miao,
        /// Modi (`Modi`)
        Modi,
        /// Mongolian (`Mong`)
        Mongolian,
        /// Mro (`Mroo`)
        Mro,
        /// Multani (`Mult`)
        Multani,
        /// Myanmar (`Mymr`)
        Myanmar,
        /// Nabataean (`Nbat`)
        Nabataean,
        /// Nandinagari (`Nand`)
        Nandinagari,
        /// New_Tai_Lue (`Talu`)
        NewTaiLue,
        /// Newa (`Newa`)
        Newa,
        /// Nko (`Nkoo`)
        Nko,
        /// Nushu (`Nshu`)
        Nushu,
        /// Nyiakeng_Puachue_Hmong (`Hmnp`)
        NyiakengPuachueHmong,
        /// Ogham (`Ogam`)
        Ogham,
        /// Ol_Chiki (`Olck`)
        OlChiki,
        /// Old_Hungarian (`Hung`)
        OldHungarian,
        /// Old_Italic (`Ital`)
        OldItalic,
        /// Old_North_Arabian (`Narb`)
        OldNorthArabian,
        /// Old_Permic (`Perm`)
        OldPermic,
        /// Old_Persian (`Xpeo`)
        OldPersian,
        /// Old_Sogdian (`Sogo`)
        OldSogdian,
        /// Old_South_Arabian (`Sarb`)
        OldSouthArabian,
        /// Old_Turkic (`Orkh`)
        OldTurkic,
        /// Old_Uyghur (`Ougr`)
        OldUyghur,
        /// Oriya (`Orya`)
        Oriya,
        /// Osage (`Osge`)
        Osage,
        /// Osmanya (`Osma`)
        Osmanya,
        /// Pahawh_Hmong (`Hmng`)
        PahawhHmong,
        /// Palmyrene (`Palm`)
        Palmyrene,
        /// Pau_Cin_Hau (`Pauc`)
        PauCinHau,
        /// Phags_Pa (`Phag`)
        PhagsPa,
        /// Phoenician (`Phnx`)
        Phoenician,
        /// Psalter_Pahlavi (`Phlp`)
        PsalterPahlavi,
        /// Rejang (`Rjng`)
        Rejang,
        /// Runic (`Runr`)
        Runic,
        /// Samaritan (`Samr`)
        Samaritan,
        /// Saurashtra (`Saur`)
        Saurashtra,
        /// Sharada (`Shrd`)
        Sharada,
        /// Shavian (`Shaw`)
        Shavian,
        /// Siddham (`Sidd`)
        Siddham,
        /// SignWriting (`Sgnw`)
        Signwriting,
        /// Sinhala (`Sinh`)
        Sinhala,
        /// Sogdian (`Sogd`)
        Sogdian,
        /// Sora_Sompeng (`Sora`)
        SoraSompeng,
        /// Soyombo (`Soyo`)
        Soyombo,
        /// Sundanese (`Sund`)
        Sundanese,
        /// Syloti_Nagri (`Sylo`)
        SylotiNagri,
        /// Syriac (`Syrc`)
        Syriac,
        /// Tagalog (`Tglg`)
        Tagalog,
        /// Tagbanwa (`Tagb`)
        Tagbanwa,
        /// Tai_Le (`Tale`)
        TaiLe,
        /// Tai_Tham (`Lana`)
        TaiTham,
        /// Tai_Viet (`Tavt`)
        TaiViet,
        /// Takri (`Takr`)
        Takri,
        /// Tamil (`Taml`)
        Tamil,
        /// Tangsa (`Tnsa`)
        Tangsa,
        /// Tangut (`Tang`)
        Tangut,
        /// Telugu (`Telu`)
        Telugu,
        /// Thaana (`Thaa`)
        Thaana,
        /// Thai (`Thai`)
        Thai,
        /// Tibetan (`Tibt`)
        Tibetan,
        /// Tifinagh (`Tfng`)
        Tifinagh,
        /// Tirhuta (`Tirh`)
        Tirhuta,
        /// Toto (`Toto`)
        Toto,
        /// Ugaritic (`Ugar`)
        Ugaritic,
        /// Unknown (`Zzzz`)
        Unknown,
        /// Vai (`Vaii`)
        Vai,
        /// Vithkuqi (`Vith`)
        Vithkuqi,
        /// Wancho (`Wcho`)
        Wancho,
        /// Warang_Citi (`Wara`)
        WarangCiti,
        /// Yezidi (`Yezi`)
        Yezidi,
        /// Yi (`Yiii`)
        Yi,
        /// Zanabazar_Square (`Zanb`)
        ZanabazarSquare,
    }

    use self::Script::*;

    pub(crate) const SCRIPT_TABLE: &[(u32, u32, Script)] = &[
        (0x0000, 0x0040, Common),
        (0x0041, 0x005A, Latin),
        (0x005B, 0x0060, Common),
        (0x0061, 0x007A, Latin),
        (0x007B, 0x00A9, Common),
        (0x00AA, 0x00AA, Latin),
        (0x00AB, 0x00B9, Common),
        (0x00BA, 0x00BA, Latin),
        (0x00BB, 0x00BF, Common),
        (0x00C0, 0x00D6, Latin),
        (0x00D7, 0x00D7, Common),
        (0x00D8, 0x00F6, Latin),
        (0x00F7, 0x00F7, Common),
        (0x00F8, 0x02B8, Latin),
        (0x02B9, 0x02DF, Common),
        (0x02E0, 0x02E4, Latin),
        (0x02E5, 0x02E9, Common),
        (0x02EA, 0x02EB, Bopomofo),
        (0x02EC, 0x02FF, Common),
        (0x0300, 0x036F, Inherited),
        (0x0370, 0x0373, Greek),
        (0x0374, 0x0374, Common),
        (0x0375, 0x0377, Greek),
        (0x037A, 0x037D, Greek),
        (0x037E, 0x037E, Common),
        (0x037F, 0x037F, Greek),
        (0x0384, 0x0384, Greek),
        (0x0385, 0x0385, Common),
        (0x0386, 0x0386, Greek),
        (0x0387, 0x0387, Common),
        (0x0388, 0x038A, Greek),
        (0x038C, 0x038C, Greek),
        (0x038E, 0x03A1, Greek),
        (0x03A3, 0x03E1, Greek),
        (0x03E2, 0x03EF, Coptic),
        (0x03F0, 0x03FF, Greek),
        (0x0400, 0x0484, Cyrillic),
        (0x0485, 0x0486, Inherited),
        (0x0487, 0x052F, Cyrillic),
        (0x0531, 0x0556, Armenian),
        (0x0559, 0x058A, Armenian),
        (0x058D, 0x058F, Armenian),
        (0x0591, 0x05C7, Hebrew),
        (0x05D0, 0x05EA, Hebrew),
        (0x05EF, 0x05F4, Hebrew),
        (0x0600, 0x0604, Arabic),
        (0x0605, 0x0605, Common),
        (0x0606, 0x060B, Arabic),
        (0x060C, 0x060C, Common),
        (0x060D, 0x061A, Arabic),
        (0x061B, 0x061B, Common),
        (0x061C, 0x061E, Arabic),
        (0x061F, 0x061F, Common),
        (0x0620, 0x063F, Arabic),
        (0x0640, 0x0640, Common),
        (0x0641, 0x064A, Arabic),
        (0x064B, 0x0655, Inherited),
        (0x0656, 0x066F, Arabic),
        (0x0670, 0x0670, Inherited),
        (0x0671, 0x06DC, Arabic),
        (0x06DD, 0x06DD, Common),
        (0x06DE, 0x06FF, Arabic),
        (0x0700, 0x070D, Syriac),
        (0x070F, 0x074A, Syriac),
        (0x074D, 0x074F, Syriac),
        (0x0750, 0x077F, Arabic),
        (0x0780, 0x07B1, Thaana),
        (0x07C0, 0x07FA, Nko),
        (0x07FD, 0x07FF, Nko),
        (0x0800, 0x082D, Samaritan),
        (0x0830, 0x083E, Samaritan),
        (0x0840, 0x085B, Mandaic),
        (0x085E, 0x085E, Mandaic),
        (0x0860, 0x086A, Syriac),
        (0x0870, 0x088E, Arabic),
        (0x0890, 0x0891, Arabic),
        (0x0898, 0x08E1, Arabic),
        (0x08E2, 0x08E2, Common),
        (0x08E3, 0x08FF, Arabic),
        (0x0900, 0x0950, Devanagari),
        (0x0951, 0x0954, Inherited),
        (0x0955, 0x0963, Devanagari),
        (0x0964, 0x0965, Common),
        (0x0966, 0x097F, Devanagari),
        (0x0980, 0x0983, Bengali),
        (0x0985, 0x098C, Bengali),
        (0x098F, 0x0990, Bengali),
        (0x0993, 0x09A8, Bengali),
        (0x09AA, 0x09B0, Bengali),
        (0x09B2, 0x09B2, Bengali),
        (0x09B6, 0x09B9, Bengali),
        (0x09BC, 0x09C4, Bengali),
        (0x09C7, 0x09C8, Bengali),
        (0x09CB, 0x09CE, Bengali),
        (0x09D7, 0x09D7, Bengali),
        (0x09DC, 0x09DD, Bengali),
        (0x09DF, 0x09E3, Bengali),
        (0x09E6, 0x09FE, Bengali),
        (0x0A01, 0x0A03, Gurmukhi),
        (0x0A05, 0x0A0A, Gurmukhi),
        (0x0A0F, 0x0A10, Gurmukhi),
        (0x0A13, 0x0A28, Gurmukhi),
        (0x0A2A, 0x0A30, Gurmukhi),
        (0x0A32, 0x0A33, Gurmukhi),
        (0x0A35, 0x0A36, Gurmukhi),
        (0x0A38, 0x0A39, Gurmukhi),
        (0x0A3C, 0x0A3C, Gurmukhi),
        (0x0A3E, 0x0A42, Gurmukhi),
        (0x0A47, 0x0A48, Gurmukhi),
        (0x0A4B, 0x0A4D, Gurmukhi),
        (0x0A51, 0x0A51, Gurmukhi),
        (0x0A59, 0x0A5C, Gurmukhi),
        (0x0A5E, 0x0A5E, Gurmukhi),
        (0x0A66, 0x0A76, Gurmukhi),
        (0x0A81, 0x0A83, Gujarati),
        (0x0A85, 0x0A8D, Gujarati),
        (0x0A8F, 0x0A91, Gujarati),
        (0x0A93, 0x0AA8, Gujarati),
        (0x0AAA, 0x0AB0, Gujarati),
        (0x0AB2, 0x0AB3, Gujarati),
        (0x0AB5, 0x0AB9, Gujarati),
        (0x0ABC, 0x0AC5, Gujarati),
        (0x0AC7, 0x0AC9, Gujarati),
        (0x0ACB, 0x0ACD, Gujarati),
        (0x0AD0, 0x0AD0, Gujarati),
        (0x0AE0, 0x0AE3, Gujarati),
        (0x0AE6, 0x0AF1, Gujarati),
        (0x0AF9, 0x0AFF, Gujarati),
        (0x0B01, 0x0B03, Oriya),
        (0x0B05, 0x0B0C, Oriya),
        (0x0B0F, 0x0B10, Oriya),
        (0x0B13, 0x0B28, Oriya),
        (0x0B2A, 0x0B30, Oriya),
        (0x0B32, 0x0B33, Oriya),
        (0x0B35, 0x0B39, Oriya),
        (0x0B3C, 0x0B44, Oriya),
        (0x0B47, 0x0B48, Oriya),
        (0x0B4B, 0x0B4D, Oriya),
        (0x0B55, 0x0B57, Oriya),
        (0x0B5C, 0x0B5D, Oriya),
        (0x0B5F, 0x0B63, Oriya),
        (0x0B66, 0x0B77, Oriya),
        (0x0B82, 0x0B83, Tamil),
        (0x0B85, 0x0B8A, Tamil),
        (0x0B8E, 0x0B90, Tamil),
        (0x0B92, 0x0B95, Tamil),
        (0x0B99, 0x0B9A, Tamil),
        (0x0B9C, 0x0B9C, Tamil),
        (0x0B9E, 0x0B9F, Tamil),
        (0x0BA3, 0x0BA4, Tamil),
        (0x0BA8, 0x0BAA, Tamil),
        (0x0BAE, 0x0BB9, Tamil),
        (0x0BBE, 0x0BC2, Tamil),
        (0x0BC6, 0x0BC8, Tamil),
        (0x0BCA, 0x0BCD, Tamil),
        (0x0BD0, 0x0BD0, Tamil),
        (0x0BD7, 0x0BD7, Tamil),
        (0x0BE6, 0x0BFA, Tamil),
        (0x0C00, 0x0C0C, Telugu),
        (0x0C0E, 0x0C10, Telugu),
        (0x0C12, 0x0C28, Telugu),
        (0x0C2A, 0x0C39, Telugu),
        (0x0C3C, 0x0C44, Telugu),
        (0x0C46, 0x0C48, Telugu),
        (0x0C4A, 0x0C4D, Telugu),
        (0x0C55, 0x0C56, Telugu),
        (0x0C58, 0x0C5A, Telugu),
        (0x0C5D, 0x0C5D, Telugu),
        (0x0C60, 0x0C63, Telugu),
        (0x0C66, 0x0C6F, Telugu),
        (0x0C77, 0x0C7F, Telugu),
        (0x0C80, 0x0C8C, Kannada),
        (0x0C8E, 0x0C90, Kannada),
        (0x0C92, 0x0CA8, Kannada),
        (0x0CAA, 0x0CB3, Kannada),
        (0x0CB5, 0x0CB9, Kannada),
        (0x0CBC, 0x0CC4, Kannada),
        (0x0CC6, 0x0CC8, Kannada),
        (0x0CCA, 0x0CCD, Kannada),
        (0x0CD5, 0x0CD6, Kannada),
        (0x0CDD, 0x0CDE, Kannada),
        (0x0CE0, 0x0CE3, Kannada),
        (0x0CE6, 0x0CEF, Kannada),
        (0x0CF1, 0x0CF2, Kannada),
        (0x0D00, 0x0D0C, Malayalam),
        (0x0D0E, 0x0D10, Malayalam),
        (0x0D12, 0x0D44, Malayalam),
        (0x0D46, 0x0D48, Malayalam),
        (0x0D4A, 0x0D4F, Malayalam),
        (0x0D54, 0x0D63, Malayalam),
        (0x0D66, 0x0D7F, Malayalam),
        (0x0D81, 0x0D83, Sinhala),
        (0x0D85, 0x0D96, Sinhala),
        (0x0D9A, 0x0DB1, Sinhala),
        (0x0DB3, 0x0DBB, Sinhala),
        (0x0DBD, 0x0DBD, Sinhala),
        (0x0DC0, 0x0DC6, Sinhala),
        (0x0DCA, 0x0DCA, Sinhala),
        (0x0DCF, 0x0DD4, Sinhala),
        (0x0DD6, 0x0DD6, Sinhala),
        (0x0DD8, 0x0DDF, Sinhala),
        (0x0DE6, 0x0DEF, Sinhala),
        (0x0DF2, 0x0DF4, Sinhala),
        (0x0E01, 0x0E3A, Thai),
        (0x0E3F, 0x0E3F, Common),
        (0x0E40, 0x0E5B, Thai),
        (0x0E81, 0x0E82, Lao),
        (0x0E84, 0x0E84, Lao),
        (0x0E86, 0x0E8A, Lao),
        (0x0E8C, 0x0EA3, Lao),
        (0x0EA5, 0x0EA5, Lao),
        (0x0EA7, 0x0EBD, Lao),
        (0x0EC0, 0x0EC4, Lao),
        (0x0EC6, 0x0EC6, Lao),
        (0x0EC8, 0x0ECD, Lao),
        (0x0ED0, 0x0ED9, Lao),
        (0x0EDC, 0x0EDF, Lao),
        (0x0F00, 0x0F47, Tibetan),
        (0x0F49, 0x0F6C, Tibetan),
        (0x0F71, 0x0F97, Tibetan),
        (0x0F99, 0x0FBC, Tibetan),
        (0x0FBE, 0x0FCC, Tibetan),
        (0x0FCE, 0x0FD4, Tibetan),
        (0x0FD5, 0x0FD8, Common),
        (0x0FD9, 0x0FDA, Tibetan),
        (0x1000, 0x109F, Myanmar),
        (0x10A0, 0x10C5, Georgian),
        (0x10C7, 0x10C7, Georgian),
        (0x10CD, 0x10CD, Georgian),
        (0x10D0, 0x10FA, Georgian),
        (0x10FB, 0x10FB, Common),
        (0x10FC, 0x10FF, Georgian),
        (0x1100, 0x11FF, Hangul),
        (0x1200, 0x1248, Ethiopic),
        (0x124A, 0x124D, Ethiopic),
        (0x1250, 0x1256, Ethiopic),
        (0x1258, 0x1258, Ethiopic),
        (0x125A, 0x125D, Ethiopic),
        (0x1260, 0x1288, Ethiopic),
        (0x128A, 0x128D, Ethiopic),
        (0x1290, 0x12B0, Ethiopic),
        (0x12B2, 0x12B5, Ethiopic),
        (0x12B8, 0x12BE, Ethiopic),
        (0x12C0, 0x12C0, Ethiopic),
        (0x12C2, 0x12C5, Ethiopic),
        (0x12C8, 0x12D6, Ethiopic),
        (0x12D8, 0x1310, Ethiopic),
        (0x1312, 0x1315, Ethiopic),
        (0x1318, 0x135A, Ethiopic),
        (0x135D, 0x137C, Ethiopic),
        (0x1380, 0x1399, Ethiopic),
        (0x13A0, 0x13F5, Cherokee),
        (0x13F8, 0x13FD, Cherokee),
        (0x1400, 0x167F, CanadianAboriginal),
        (0x1680, 0x169C, Ogham),
        (0x16A0, 0x16EA, Runic),
        (0x16EB, 0x16ED, Common),
        (0x16EE, 0x16F8, Runic),
        (0x1700, 0x1715, Tagalog),
        (0x171F, 0x171F, Tagalog),
        (0x1720, 0x1734, Hanunoo),
        (0x1735, 0x1736, Common),
        (0x1740, 0x1753, Buhid),
        (0x1760, 0x176C, Tagbanwa),
        (0x176E, 0x1770, Tagbanwa),
        (0x1772, 0x1773, Tagbanwa),
        (0x1780, 0x17DD, Khmer),
        (0x17E0, 0x17E9, Khmer),
        (0x17F0, 0x17F9, Khmer),
        (0x1800, 0x1801, Mongolian),
        (0x1802, 0x1803, Common),
        (0x1804, 0x1804, Mongolian),
        (0x1805, 0x1805, Common),
        (0x1806, 0x1819, Mongolian),
        (0x1820, 0x1878, Mongolian),
        (0x1880, 0x18AA, Mongolian),
        (0x18B0, 0x18F5, CanadianAboriginal),
        (0x1900, 0x191E, Limbu),
        (0x1920, 0x192B, Limbu),
        (0x1930, 0x193B, Limbu),
        (0x1940, 0x1940, Limbu),
        (0x1944, 0x194F, Limbu),
        (0x1950, 0x196D, TaiLe),
        (0x1970, 0x1974, TaiLe),
        (0x1980, 0x19AB, NewTaiLue),
        (0x19B0, 0x19C9, NewTaiLue),
        (0x19D0, 0x19DA, NewTaiLue),
        (0x19DE, 0x19DF, NewTaiLue),
        (0x19E0, 0x19FF, Khmer),
        (0x1A00, 0x1A1B, Buginese),
        (0x1A1E, 0x1A1F, Buginese),
        (0x1A20, 0x1A5E, TaiTham),
        (0x1A60, 0x1A7C, TaiTham),
        (0x1A7F, 0x1A89, TaiTham),
        (0x1A90, 0x1A99, TaiTham),
        (0x1AA0, 0x1AAD, TaiTham),
        (0x1AB0, 0x1ACE, Inherited),
        (0x1B00, 0x1B4C, Balinese),
        (0x1B50, 0x1B7E, Balinese),
        (0x1B80, 0x1BBF, Sundanese),
        (0x1BC0, 0x1BF3, Batak),
        (0x1BFC, 0x1BFF, Batak),
        (0x1C00, 0x1C37, Lepcha),
        (0x1C3B, 0x1C49, Lepcha),
        (0x1C4D, 0x1C4F, Lepcha),
        (0x1C50, 0x1C7F, OlChiki),
        (0x1C80, 0x1C88, Cyrillic),
        (0x1C90, 0x1CBA, Georgian),
        (0x1CBD, 0x1CBF, Georgian),
        (0x1CC0, 0x1CC7, Sundanese),
        (0x1CD0, 0x1CD2, Inherited),
        (0x1CD3, 0x1CD3, Common),
        (0x1CD4, 0x1CE0, Inherited),
        (0x1CE1, 0x1CE1, Common),
        (0x1CE2, 0x1CE8, Inherited),
        (0x1CE9, 0x1CEC, Common),
        (0x1CED, 0x1CED, Inherited),
        (0x1CEE, 0x1CF3, Common),
        (0x1CF4, 0x1CF4, Inherited),
        (0x1CF5, 0x1CF7, Common),
        (0x1CF8, 0x1CF9, Inherited),
        (0x1CFA, 0x1CFA, Common),
        (0x1D00, 0x1D25, Latin),
        (0x1D26, 0x1D2A, Greek),
        (0x1D2B, 0x1D2B, Cyrillic),
        (0x1D2C, 0x1D5C, Latin),
        (0x1D5D, 0x1D61, Greek),
        (0x1D62, 0x1D65, Latin),
        (0x1D66, 0x1D6A, Greek),
        (0x1D6B, 0x1D77, Latin),
        (0x1D78, 0x1D78, Cyrillic),
        (0x1D79, 0x1DBE, Latin),
        (0x1DBF, 0x1DBF, Greek),
        (0x1DC0, 0x1DFF, Inherited),
        (0x1E00, 0x1EFF, Latin),
        (0x1F00, 0x1F15, Greek),
        (0x1F18, 0x1F1D, Greek),
        (0x1F20, 0x1F45, Greek),
        (0x1F48, 0x1F4D, Greek),
        (0x1F50, 0x1F57, Greek),
        (0x1F59, 0x1F59, Greek),
        (0x1F5B, 0x1F5B, Greek),
        (0x1F5D, 0x1F5D, Greek),
        (0x1F5F, 0x1F7D, Greek),
        (0x1F80, 0x1FB4, Greek),
        (0x1FB6, 0x1FC4, Greek),
        (0x1FC6, 0x1FD3, Greek),
        (0x1FD6, 0x1FDB, Greek),
        (0x1FDD, 0x1FEF, Greek),
        (0x1FF2, 0x1FF4, Greek),
        (0x1FF6, 0x1FFE, Greek),
        (0x2000, 0x200B, Common),
        (0x200C, 0x200D, Inherited),
        (0x200E, 0x2064, Common),
        (0x2066, 0x2070, Common),
        (0x2071, 0x2071, Latin),
        (0x2074, 0x207E, Common),
        (0x207F, 0x207F, Latin),
        (0x2080, 0x208E, Common),
        (0x2090, 0x209C, Latin),
        (0x20A0, 0x20C0, Common),
        (0x20D0, 0x20F0, Inherited),
        (0x2100, 0x2125, Common),
        (0x2126, 0x2126, Greek),
        (0x2127, 0x2129, Common),
        (0x212A, 0x212B, Latin),
        (0x212C, 0x2131, Common),
        (0x2132, 0x2132, Latin),
        (0x2133, 0x214D, Common),
        (0x214E, 0x214E, Latin),
        (0x214F, 0x215F, Common),
        (0x2160, 0x2188, Latin),
        (0x2189, 0x218B, Common),
        (0x2190, 0x2426, Common),
        (0x2440, 0x244A, Common),
        (0x2460, 0x27FF, Common),
        (0x2800, 0x28FF, Braille),
        (0x2900, 0x2B73, Common),
        (0x2B76, 0x2B95, Common),
        (0x2B97, 0x2BFF, Common),
        (0x2C00, 0x2C5F, Glagolitic),
        (0x2C60, 0x2C7F, Latin),
        (0x2C80, 0x2CF3, Coptic),
        (0x2CF9, 0x2CFF, Coptic),
        (0x2D00, 0x2D25, Georgian),
        (0x2D27, 0x2D27, Georgian),
        (0x2D2D, 0x2D2D, Georgian),
        (0x2D30, 0x2D67, Tifinagh),
        (0x2D6F, 0x2D70, Tifinagh),
        (0x2D7F, 0x2D7F, Tifinagh),
        (0x2D80, 0x2D96, Ethiopic),
        (0x2DA0, 0x2DA6, Ethiopic),
        (0x2DA8, 0x2DAE, Ethiopic),
        (0x2DB0, 0x2DB6, Ethiopic),
        (0x2DB8, 0x2DBE, Ethiopic),
        (0x2DC0, 0x2DC6, Ethiopic),
        (0x2DC8, 0x2DCE, Ethiopic),
        (0x2DD0, 0x2DD6, Ethiopic),
        (0x2DD8, 0x2DDE, Ethiopic),
        (0x2DE0, 0x2DFF, Cyrillic),
        (0x2E00, 0x2E5D, Common),
        (0x2E80, 0x2E99, Han),
        (0x2E9B, 0x2EF3, Han),
        (0x2F00, 0x2FD5, Han),
        (0x2FF0, 0x2FFB, Common),
        (0x3000, 0x3004, Common),
        (0x3005, 0x3005, Han),
        (0x3006, 0x3006, Common),
        (0x3007, 0x3007, Han),
        (0x3008, 0x3020, Common),
        (0x3021, 0x3029, Han),
        (0x302A, 0x302D, Inherited),
        (0x302E, 0x302F, Hangul),
        (0x3030, 0x3037, Common),
        (0x3038, 0x303B, Han),
        (0x303C, 0x303F, Common),
        (0x3041, 0x3096, Hiragana),
        (0x3099, 0x309A, Inherited),
        (0x309B, 0x309C, Common),
        (0x309D, 0x309F, Hiragana),
        (0x30A0, 0x30A0, Common),
        (0x30A1, 0x30FA, Katakana),
        (0x30FB, 0x30FC, Common),
        (0x30FD, 0x30FF, Katakana),
        (0x3105, 0x312F, Bopomofo),
        (0x3131, 0x318E, Hangul),
        (0x3190, 0x319F, Common),
        (0x31A0, 0x31BF, Bopomofo),
        (0x31C0, 0x31E3, Common),
        (0x31F0, 0x31FF, Katakana),
        (0x3200, 0x321E, Hangul),
        (0x3220, 0x325F, Common),
        (0x3260, 0x327E, Hangul),
        (0x327F, 0x32CF, Common),
        (0x32D0, 0x32FE, Katakana),
        (0x32FF, 0x32FF, Common),
        (0x3300, 0x3357, Katakana),
        (0x3358, 0x33FF, Common),
        (0x3400, 0x4DBF, Han),
        (0x4DC0, 0x4DFF, Common),
        (0x4E00, 0x9FFF, Han),
        (0xA000, 0xA48C, Yi),
        (0xA490, 0xA4C6, Yi),
        (0xA4D0, 0xA4FF, Lisu),
        (0xA500, 0xA62B, Vai),
        (0xA640, 0xA69F, Cyrillic),
        (0xA6A0, 0xA6F7, Bamum),
        (0xA700, 0xA721, Common),
        (0xA722, 0xA787, Latin),
        (0xA788, 0xA78A, Common),
        (0xA78B, 0xA7CA, Latin),
        (0xA7D0, 0xA7D1, Latin),
        (0xA7D3, 0xA7D3, Latin),
        (0xA7D5, 0xA7D9, Latin),
        (0xA7F2, 0xA7FF, Latin),
        (0xA800, 0xA82C, SylotiNagri),
        (0xA830, 0xA839, Common),
        (0xA840, 0xA877, PhagsPa),
        (0xA880, 0xA8C5, Saurashtra),
        (0xA8CE, 0xA8D9, Saurashtra),
        (0xA8E0, 0xA8FF, Devanagari),
        (0xA900, 0xA92D, KayahLi),
        (0xA92E, 0xA92E, Common),
        (0xA92F, 0xA92F, KayahLi),
        (0xA930, 0xA953, Rejang),
        (0xA95F, 0xA95F, Rejang),
        (0xA960, 0xA97C, Hangul),
        (0xA980, 0xA9CD, Javanese),
        (0xA9CF, 0xA9CF, Common),
        (0xA9D0, 0xA9D9, Javanese),
        (0xA9DE, 0xA9DF, Javanese),
        (0xA9E0, 0xA9FE, Myanmar),
        (0xAA00, 0xAA36, Cham),
        (0xAA40, 0xAA4D, Cham),
        (0xAA50, 0xAA59, Cham),
        (0xAA5C, 0xAA5F, Cham),
        (0xAA60, 0xAA7F, Myanmar),
        (0xAA80, 0xAAC2, TaiViet),
        (0xAADB, 0xAADF, TaiViet),
        (0xAAE0, 0xAAF6, MeeteiMayek),
        (0xAB01, 0xAB06, Ethiopic),
        (0xAB09, 0xAB0E, Ethiopic),
        (0xAB11, 0xAB16, Ethiopic),
        (0xAB20, 0xAB26, Ethiopic),
        (0xAB28, 0xAB2E, Ethiopic),
        (0xAB30, 0xAB5A, Latin),
        (0xAB5B, 0xAB5B, Common),
        (0xAB5C, 0xAB64, Latin),
        (0xAB65, 0xAB65, Greek),
        (0xAB66, 0xAB69, Latin),
        (0xAB6A, 0xAB6B, Common),
        (0xAB70, 0xABBF, Cherokee),
        (0xABC0, 0xABED, MeeteiMayek),
        (0xABF0, 0xABF9, MeeteiMayek),
        (0xAC00, 0xD7A3, Hangul),
        (0xD7B0, 0xD7C6, Hangul),
        (0xD7CB, 0xD7FB, Hangul),
        (0xF900, 0xFA6D, Han),
        (0xFA70, 0xFAD9, Han),
        (0xFB00, 0xFB06, Latin),
        (0xFB13, 0xFB17, Armenian),
        (0xFB1D, 0xFB36, Hebrew),
        (0xFB38, 0xFB3C, Hebrew),
        (0xFB3E, 0xFB3E, Hebrew),
        (0xFB40, 0xFB41, Hebrew),
        (0xFB43, 0xFB44, Hebrew),
        (0xFB46, 0xFB4F, Hebrew),
        (0xFB50, 0xFBC2, Arabic),
        (0xFBD3, 0xFD3D, Arabic),
        (0xFD3E, 0xFD3F, Common),
        (0xFD40, 0xFD8F, Arabic),
        (0xFD92, 0xFDC7, Arabic),
        (0xFDCF, 0xFDCF, Arabic),
        (0xFDF0, 0xFDFF, Arabic),
        (0xFE00, 0xFE0F, Inherited),
        (0xFE10, 0xFE19, Common),
        (0xFE20, 0xFE2D, Inherited),
        (0xFE2E, 0xFE2F, Cyrillic),
        (0xFE30, 0xFE52, Common),
        (0xFE54, 0xFE66, Common),
        (0xFE68, 0xFE6B, Common),
        (0xFE70, 0xFE74, Arabic),
        (0xFE76, 0xFEFC, Arabic),
        (0xFEFF, 0xFEFF, Common),
        (0xFF01, 0xFF20, Common),
        (0xFF21, 0xFF3A, Latin),
        (0xFF3B, 0xFF40, Common),
        (0xFF41, 0xFF5A, Latin),
        (0xFF5B, 0xFF65, Common),
        (0xFF66, 0xFF6F, Katakana),
        (0xFF70, 0xFF70, Common),
        (0xFF71, 0xFF9D, Katakana),
        (0xFF9E, 0xFF9F, Common),
        (0xFFA0, 0xFFBE, Hangul),
        (0xFFC2, 0xFFC7, Hangul),
        (0xFFCA, 0xFFCF, Hangul),
        (0xFFD2, 0xFFD7, Hangul),
        (0xFFDA, 0xFFDC, Hangul),
        (0xFFE0, 0xFFE6, Common),
        (0xFFE8, 0xFFEE, Common),
        (0xFFF9, 0xFFFD, Common),
        (0x10000, 0x1000B, LinearB),
        (0x1000D, 0x10026, LinearB),
        (0x10028, 0x1003A, LinearB),
        (0x1003C, 0x1003D, LinearB),
        (0x1003F, 0x1004D, LinearB),
        (0x10050, 0x1005D, LinearB),
        (0x10080, 0x100FA, LinearB),
        (0x10100, 0x10102, Common),
        (0x10107, 0x10133, Common),
        (0x10137, 0x1013F, Common),
        (0x10140, 0x1018E, Greek),
        (0x10190, 0x1019C, Common),
        (0x101A0, 0x101A0, Greek),
        (0x101D0, 0x101FC, Common),
        (0x101FD, 0x101FD, Inherited),
        (0x10280, 0x1029C, Lycian),
        (0x102A0, 0x102D0, Carian),
        (0x102E0, 0x102E0, Inherited),
        (0x102E1, 0x102FB, Common),
        (0x10300, 0x10323, OldItalic),
        (0x1032D, 0x1032F, OldItalic),
        (0x10330, 0x1034A, Gothic),
        (0x10350, 0x1037A, OldPermic),
        (0x10380, 0x1039D, Ugaritic),
        (0x1039F, 0x1039F, Ugaritic),
        (0x103A0, 0x103C3, OldPersian),
        (0x103C8, 0x103D5, OldPersian),
        (0x10400, 0x1044F, Deseret),
        (0x10450, 0x1047F, Shavian),
        (0x10480, 0x1049D, Osmanya),
        (0x104A0, 0x104A9, Osmanya),
        (0x104B0, 0x104D3, Osage),
        (0x104D8, 0x104FB, Osage),
        (0x10500, 0x10527, Elbasan),
        (0x10530, 0x10563, CaucasianAlbanian),
        (0x1056F, 0x1056F, CaucasianAlbanian),
        (0x10570, 0x1057A, Vithkuqi),
        (0x1057C, 0x1058A, Vithkuqi),
        (0x1058C, 0x10592, Vithkuqi),
        (0x10594, 0x10595, Vithkuqi),
        (0x10597, 0x105A1, Vithkuqi),
        (0x105A3, 0x105B1, Vithkuqi),
        (0x105B3, 0x105B9, Vithkuqi),
        (0x105BB, 0x105BC, Vithkuqi),
        (0x10600, 0x10736, LinearA),
        (0x10740, 0x10755, LinearA),
        (0x10760, 0x10767, LinearA),
        (0x10780, 0x10785, Latin),
        (0x10787, 0x107B0, Latin),
        (0x107B2, 0x107BA, Latin),
        (0x10800, 0x10805, Cypriot),
        (0x10808, 0x10808, Cypriot),
        (0x1080A, 0x10835, Cypriot),
        (0x10837, 0x10838, Cypriot),
        (0x1083C, 0x1083C, Cypriot),
        (0x1083F, 0x1083F, Cypriot),
        (0x10840, 0x10855, ImperialAramaic),
        (0x10857, 0x1085F, ImperialAramaic),
        (0x10860, 0x1087F, Palmyrene),
        (0x10880, 0x1089E, Nabataean),
        (0x108A7, 0x108AF, Nabataean),
        (0x108E0, 0x108F2, Hatran),
        (0x108F4, 0x108F5, Hatran),
        (0x108FB, 0x108FF, Hatran),
        (0x10900, 0x1091B, Phoenician),
        (0x1091F, 0x1091F, Phoenician),
        (0x10920, 0x10939, Lydian),
        (0x1093F, 0x1093F, Lydian),
        (0x10980, 0x1099F, MeroiticHieroglyphs),
        (0x109A0, 0x109B7, MeroiticCursive),
        (0x109BC, 0x109CF, MeroiticCursive),
        (0x109D2, 0x109FF, MeroiticCursive),
        (0x10A00, 0x10A03, Kharoshthi),
        (0x10A05, 0x10A06, Kharoshthi),
        (0x10A0C, 0x10A13, Kharoshthi),
        (0x10A15, 0x10A17, Kharoshthi),
        (0x10A19, 0x10A35, Kharoshthi),
        (0x10A38, 0x10A3A, Kharoshthi),
        (0x10A3F, 0x10A48, Kharoshthi),
        (0x10A50, 0x10A58, Kharoshthi),
        (0x10A60, 0x10A7F, OldSouthArabian),
        (0x10A80, 0x10A9F, OldNorthArabian),
        (0x10AC0, 0x10AE6, Manichaean),
        (0x10AEB, 0x10AF6, Manichaean),
        (0x10B00, 0x10B35, Avestan),
        (0x10B39, 0x10B3F, Avestan),
        (0x10B40, 0x10B55, InscriptionalParthian),
        (0x10B58, 0x10B5F, InscriptionalParthian),
        (0x10B60, 0x10B72, InscriptionalPahlavi),
        (0x10B78, 0x10B7F, InscriptionalPahlavi),
        (0x10B80, 0x10B91, PsalterPahlavi),
        (0x10B99, 0x10B9C, PsalterPahlavi),
        (0x10BA9, 0x10BAF, PsalterPahlavi),
        (0x10C00, 0x10C48, OldTurkic),
        (0x10C80, 0x10CB2, OldHungarian),
        (0x10CC0, 0x10CF2, OldHungarian),
        (0x10CFA, 0x10CFF, OldHungarian),
        (0x10D00, 0x10D27, HanifiRohingya),
        (0x10D30, 0x10D39, HanifiRohingya),
        (0x10E60, 0x10E7E, Arabic),
        (0x10E80, 0x10EA9, Yezidi),
        (0x10EAB, 0x10EAD, Yezidi),
        (0x10EB0, 0x10EB1, Yezidi),
        (0x10F00, 0x10F27, OldSogdian),
        (0x10F30, 0x10F59, Sogdian),
        (0x10F70, 0x10F89, OldUyghur),
        (0x10FB0, 0x10FCB, Chorasmian),
        (0x10FE0, 0x10FF6, Elymaic),
        (0x11000, 0x1104D, Brahmi),
        (0x11052, 0x11075, Brahmi),
        (0x1107F, 0x1107F, Brahmi),
        (0x11080, 0x110C2, Kaithi),
        (0x110CD, 0x110CD, Kaithi),
        (0x110D0, 0x110E8, SoraSompeng),
        (0x110F0, 0x110F9, SoraSompeng),
        (0x11100, 0x11134, Chakma),
        (0x11136, 0x11147, Chakma),
        (0x11150, 0x11176, Mahajani),
        (0x11180, 0x111DF, Sharada),
        (0x111E1, 0x111F4, Sinhala),
        (0x11200, 0x11211, Khojki),
        (0x11213, 0x1123E, Khojki),
        (0x11280, 0x11286, Multani),
        (0x11288, 0x11288, Multani),
        (0x1128A, 0x1128D, Multani),
        (0x1128F, 0x1129D, Multani),
        (0x1129F, 0x112A9, Multani),
        (0x112B0, 0x112EA, Khudawadi),
        (0x112F0, 0x112F9, Khudawadi),
        (0x11300, 0x11303, Grantha),
        (0x11305, 0x1130C, Grantha),
        (0x1130F, 0x11310, Grantha),
        (0x11313, 0x11328, Grantha),
        (0x1132A, 0x11330, Grantha),
        (0x11332, 0x11333, Grantha),
        (0x11335, 0x11339, Grantha),
        (0x1133B, 0x1133B, Inherited),
        (0x1133C, 0x11344, Grantha),
        (0x11347, 0x11348, Grantha),
        (0x1134B, 0x1134D, Grantha),
        (0x11350, 0x11350, Grantha),
        (0x11357, 0x11357, Grantha),
        (0x1135D, 0x11363, Grantha),
        (0x11366, 0x1136C, Grantha),
        (0x11370, 0x11374, Grantha),
        (0x11400, 0x1145B, Newa),
        (0x1145D, 0x11461, Newa),
        (0x11480, 0x114C7, Tirhuta),
        (0x114D0, 0x114D9, Tirhuta),
        (0x11580, 0x115B5, Siddham),
        (0x115B8, 0x115DD, Siddham),
        (0x11600, 0x11644, Modi),
        (0x11650, 0x11659, Modi),
        (0x11660, 0x1166C, Mongolian),
        (0x11680, 0x116B9, Takri),
        (0x116C0, 0x116C9, Takri),
        (0x11700, 0x1171A, Ahom),
        (0x1171D, 0x1172B, Ahom),
        (0x11730, 0x11746, Ahom),
        (0x11800, 0x1183B, Dogra),
        (0x118A0, 0x118F2, WarangCiti),
        (0x118FF, 0x118FF, WarangCiti),
        (0x11900, 0x11906, DivesAkuru),
        (0x11909, 0x11909, DivesAkuru),
        (0x1190C, 0x11913, DivesAkuru),
        (0x11915, 0x11916, DivesAkuru),
        (0x11918, 0x11935, DivesAkuru),
        (0x11937, 0x11938, DivesAkuru),
        (0x1193B, 0x11946, DivesAkuru),
        (0x11950, 0x11959, DivesAkuru),
        (0x119A0, 0x119A7, Nandinagari),
        (0x119AA, 0x119D7, Nandinagari),
        (0x119DA, 0x119E4, Nandinagari),
        (0x11A00, 0x11A47, ZanabazarSquare),
        (0x11A50, 0x11AA2, Soyombo),
        (0x11AB0, 0x11ABF, CanadianAboriginal),
        (0x11AC0, 0x11AF8, PauCinHau),
        (0x11C00, 0x11C08, Bhaiksuki),
        (0x11C0A, 0x11C36, Bhaiksuki),
        (0x11C38, 0x11C45, Bhaiksuki),
        (0x11C50, 0x11C6C, Bhaiksuki),
        (0x11C70, 0x11C8F, Marchen),
        (0x11C92, 0x11CA7, Marchen),
        (0x11CA9, 0x11CB6, Marchen),
        (0x11D00, 0x11D06, MasaramGondi),
        (0x11D08, 0x11D09, MasaramGondi),
        (0x11D0B, 0x11D36, MasaramGondi),
        (0x11D3A, 0x11D3A, MasaramGondi),
        (0x11D3C, 0x11D3D, MasaramGondi),
        (0x11D3F, 0x11D47, MasaramGondi),
        (0x11D50, 0x11D59, MasaramGondi),
        (0x11D60, 0x11D65, GunjalaGondi),
        (0x11D67, 0x11D68, GunjalaGondi),
        (0x11D6A, 0x11D8E, GunjalaGondi),
        (0x11D90, 0x11D91, GunjalaGondi),
        (0x11D93, 0x11D98, GunjalaGondi),
        (0x11DA0, 0x11DA9, GunjalaGondi),
        (0x11EE0, 0x11EF8, Makasar),
        (0x11FB0, 0x11FB0, Lisu),
        (0x11FC0, 0x11FF1, Tamil),
        (0x11FFF, 0x11FFF, Tamil),
        (0x12000, 0x12399, Cuneiform),
        (0x12400, 0x1246E, Cuneiform),
        (0x12470, 0x12474, Cuneiform),
        (0x12480, 0x12543, Cuneiform),
        (0x12F90, 0x12FF2, CyproMinoan),
        (0x13000, 0x1342E, EgyptianHieroglyphs),
        (0x13430, 0x13438, EgyptianHieroglyphs),
        (0x14400, 0x14646, AnatolianHieroglyphs),
        (0x16800, 0x16A38, Bamum),
        (0x16A40, 0x16A5E, Mro),
        (0x16A60, 0x16A69, Mro),
        (0x16A6E, 0x16A6F, Mro),
        (0x16A70, 0x16ABE, Tangsa),
        (0x16AC0, 0x16AC9, Tangsa),
        (0x16AD0, 0x16AED, BassaVah),
        (0x16AF0, 0x16AF5, BassaVah),
        (0x16B00, 0x16B45, PahawhHmong),
        (0x16B50, 0x16B59, PahawhHmong),
        (0x16B5B, 0x16B61, PahawhHmong),
        (0x16B63, 0x16B77, PahawhHmong),
        (0x16B7D, 0x16B8F, PahawhHmong),
        (0x16E40, 0x16E9A, Medefaidrin),
        (0x16F00, 0x16F4A, Miao),
        (0x16F4F, 0x16F87, Miao),
        (0x16F8F, 0x16F9F, Miao),
        (0x16FE0, 0x16FE0, Tangut),
        (0x16FE1, 0x16FE1, Nushu),
        (0x16FE2, 0x16FE3, Han),
        (0x16FE4, 0x16FE4, KhitanSmallScript),
        (0x16FF0, 0x16FF1, Han),
        (0x17000, 0x187F7, Tangut),
        (0x18800, 0x18AFF, Tangut),
        (0x18B00, 0x18CD5, KhitanSmallScript),
        (0x18D00, 0x18D08, Tangut),
        (0x1AFF0, 0x1AFF3, Katakana),
        (0x1AFF5, 0x1AFFB, Katakana),
        (0x1AFFD, 0x1AFFE, Katakana),
        (0x1B000, 0x1B000, Katakana),
        (0x1B001, 0x1B11F, Hiragana),
        (0x1B120, 0x1B122, Katakana),
        (0x1B150, 0x1B152, Hiragana),
        (0x1B164, 0x1B167, Katakana),
        (0x1B170, 0x1B2FB, Nushu),
        (0x1BC00, 0x1BC6A, Duployan),
        (0x1BC70, 0x1BC7C, Duployan),
        (0x1BC80, 0x1BC88, Duployan),
        (0x1BC90, 0x1BC99, Duployan),
        (0x1BC9C, 0x1BC9F, Duployan),
        (0x1BCA0, 0x1BCA3, Common),
        (0x1CF00, 0x1CF2D, Inherited),
        (0x1CF30, 0x1CF46, Inherited),
        (0x1CF50, 0x1CFC3, Common),
        (0x1D000, 0x1D0F5, Common),
        (0x1D100, 0x1D126, Common),
        (0x1D129, 0x1D166, Common),
        (0x1D167, 0x1D169, Inherited),
        (0x1D16A, 0x1D17A, Common),
        (0x1D17B, 0x1D182, Inherited),
        (0x1D183, 0x1D184, Common),
        (0x1D185, 0x1D18B, Inherited),
        (0x1D18C, 0x1D1A9, Common),
        (0x1D1AA, 0x1D1AD, Inherited),
        (0x1D1AE, 0x1D1EA, Common),
        (0x1D200, 0x1D245, Greek),
        (0x1D2E0, 0x1D2F3, Common),
        (0x1D300, 0x1D356, Common),
        (0x1D360, 0x1D378, Common),
        (0x1D400, 0x1D454, Common),
        (0x1D456, 0x1D49C, Common),
        (0x1D49E, 0x1D49F, Common),
        (0x1D4A2, 0x1D4A2, Common),
        (0x1D4A5, 0x1D4A6, Common),
        (0x1D4A9, 0x1D4AC, Common),
        (0x1D4AE, 0x1D4B9, Common),
        (0x1D4BB, 0x1D4BB, Common),
        (0x1D4BD, 0x1D4C3, Common),
        (0x1D4C5, 0x1D505, Common),
        (0x1D507, 0x1D50A, Common),
        (0x1D50D, 0x1D514, Common),
        (0x1D516, 0x1D51C, Common),
        (0x1D51E, 0x1D539, Common),
        (0x1D53B, 0x1D53E, Common),
        (0x1D540, 0x1D544, Common),
        (0x1D546, 0x1D546, Common),
        (0x1D54A, 0x1D550, Common),
        (0x1D552, 0x1D6A5, Common),
        (0x1D6A8, 0x1D7CB, Common),
        (0x1D7CE, 0x1D7FF, Common),
        (0x1D800, 0x1DA8B, Signwriting),
        (0x1DA9B, 0x1DA9F, Signwriting),
        (0x1DAA1, 0x1DAAF, Signwriting),
        (0x1DF00, 0x1DF1E, Latin),
        (0x1E000, 0x1E006, Glagolitic),
        (0x1E008, 0x1E018, Glagolitic),
        (0x1E01B, 0x1E021, Glagolitic),
        (0x1E023, 0x1E024, Glagolitic),
        (0x1E026, 0x1E02A, Glagolitic),
        (0x1E100, 0x1E12C, NyiakengPuachueHmong),
        (0x1E130, 0x1E13D, NyiakengPuachueHmong),
        (0x1E140, 0x1E149, NyiakengPuachueHmong),
        (0x1E14E, 0x1E14F, NyiakengPuachueHmong),
        (0x1E290, 0x1E2AE, Toto),
        (0x1E2C0, 0x1E2F9, Wancho),
        (0x1E2FF, 0x1E2FF, Wancho),
        (0x1E7E0, 0x1E7E6, Ethiopic),
        (0x1E7E8, 0x1E7EB, Ethiopic),
        (0x1E7ED, 0x1E7EE, Ethiopic),
        (0x1E7F0, 0x1E7FE, Ethiopic),
        (0x1E800, 0x1E8C4, MendeKikakui),
        (0x1E8C7, 0x1E8D6, MendeKikakui),
        (0x1E900, 0x1E94B, Adlam),
        (0x1E950, 0x1E959, Adlam),
        (0x1E95E, 0x1E95F, Adlam),
        (0x1EC71, 0x1ECB4, Common),
        (0x1ED01, 0x1ED3D, Common),
        (0x1EE00, 0x1EE03, Arabic),
        (0x1EE05, 0x1EE1F, Arabic),
        (0x1EE21, 0x1EE22, Arabic),
        (0x1EE24, 0x1EE24, Arabic),
        (0x1EE27, 0x1EE27, Arabic),
        (0x1EE29, 0x1EE32, Arabic),
        (0x1EE34, 0x1EE37, Arabic),
        (0x1EE39, 0x1EE39, Arabic),
        (0x1EE3B, 0x1EE3B, Arabic),
        (0x1EE42, 0x1EE42, Arabic),
        (0x1EE47, 0x1EE47, Arabic),
        (0x1EE49, 0x1EE49, Arabic),
        (0x1EE4B, 0x1EE4B, Arabic),
        (0x1EE4D, 0x1EE4F, Arabic),
        (0x1EE51, 0x1EE52, Arabic),
        (0x1EE54, 0x1EE54, Arabic),
        (0x1EE57, 0x1EE57, Arabic),
        (0x1EE59, 0x1EE59, Arabic),
        (0x1EE5B, 0x1EE5B, Arabic),
        (0x1EE5D, 0x1EE5D, Arabic),
        (0x1EE5F, 0x1EE5F, Arabic),
        (0x1EE61, 0x1EE62, Arabic),
        (0x1EE64, 0x1EE64, Arabic),
        (0x1EE67, 0x1EE6A, Arabic),
        (0x1EE6C, 0x1EE72, Arabic),
        (0x1EE74, 0x1EE77, Arabic),
        (0x1EE79, 0x1EE7C, Arabic),
        (0x1EE7E, 0x1EE7E, Arabic),
        (0x1EE80, 0x1EE89, Arabic),
        (0x1EE8B, 0x1EE9B, Arabic),
        (0x1EEA1, 0x1EEA3, Arabic),
        (0x1EEA5, 0x1EEA9, Arabic),
        (0x1EEAB, 0x1EEBB, Arabic),
        (0x1EEF0, 0x1EEF1, Arabic),
        (0x1F000, 0x1F02B, Common),
        (0x1F030, 0x1F093, Common),
        (0x1F0A0, 0x1F0AE, Common),
        (0x1F0B1, 0x1F0BF, Common),
        (0x1F0C1, 0x1F0CF, Common),
        (0x1F0D1, 0x1F0F5, Common),
        (0x1F100, 0x1F1AD, Common),
        (0x1F1E6, 0x1F1FF, Common),
        (0x1F200, 0x1F200, Hiragana),
        (0x1F201, 0x1F202, Common),
        (0x1F210, 0x1F23B, Common),
        (0x1F240, 0x1F248, Common),
        (0x1F250, 0x1F251, Common),
        (0x1F260, 0x1F265, Common),
        (0x1F300, 0x1F6D7, Common),
        (0x1F6DD, 0x1F6EC, Common),
        (0x1F6F0, 0x1F6FC, Common),
        (0x1F700, 0x1F773, Common),
        (0x1F780, 0x1F7D8, Common),
        (0x1F7E0, 0x1F7EB, Common),
        (0x1F7F0, 0x1F7F0, Common),
        (0x1F800, 0x1F80B, Common),
        (0x1F810, 0x1F847, Common),
        (0x1F850, 0x1F859, Common),
        (0x1F860, 0x1F887, Common),
        (0x1F890, 0x1F8AD, Common),
        (0x1F8B0, 0x1F8B1, Common),
        (0x1F900, 0x1FA53, Common),
        (0x1FA60, 0x1FA6D, Common),
        (0x1FA70, 0x1FA74, Common),
        (0x1FA78, 0x1FA7C, Common),
        (0x1FA80, 0x1FA86, Common),
        (0x1FA90, 0x1FAAC, Common),
        (0x1FAB0, 0x1FABA, Common),
        (0x1FAC0, 0x1FAC5, Common),
        (0x1FAD0, 0x1FAD9, Common),
        (0x1FAE0, 0x1FAE7, Common),
        (0x1FAF0, 0x1FAF6, Common),
        (0x1FB00, 0x1FB92, Common),
        (0x1FB94, 0x1FBCA, Common),
        (0x1FBF0, 0x1FBF9, Common),
        (0x20000, 0x2A6DF, Han),
        (0x2A700, 0x2B738, Han),
        (0x2B740, 0x2B81D, Han),
        (0x2B820, 0x2CEA1, Han),
        (0x2CEB0, 0x2EBE0, Han),
        (0x2F800, 0x2FA1D, Han),
        (0x30000, 0x3134A, Han),
        (0xE0001, 0xE0001, Common),
        (0xE0020, 0xE007F, Common),
        (0xE0100, 0xE01EF, Inherited),
    ];

    pub(crate) const SCRIPT_NAMES: &[(&str, Script)] = &[
        ("adlam", Adlam),
        ("adlm", Adlam),
        ("aghb", CaucasianAlbanian),
        ("ahom", Ahom),
        ("anatolianhieroglyphs", AnatolianHieroglyphs),
        ("arab", Arabic),
        ("arabic", Arabic),
        ("armenian", Armenian),
        ("armi", ImperialAramaic),
        ("armn", Armenian),
        ("avestan", Avestan),
        ("avst", Avestan),
        ("bali", Balinese),
        ("balinese", Balinese),
        ("bamu", Bamum),
        ("bamum", Bamum),
        ("bass", BassaVah),
        ("bassavah", BassaVah),
        ("batak", Batak),
        ("batk", Batak),
        ("beng", Bengali),
        ("bengali", Bengali),
        ("bhaiksuki", Bhaiksuki),
        ("bhks", Bhaiksuki),
        ("bopo", Bopomofo),
        ("bopomofo", Bopomofo),
        ("brah", Brahmi),
        ("brahmi", Brahmi),
        ("brai", Braille),
        ("braille", Braille),
        ("bugi", Buginese),
        ("buginese", Buginese),
        ("buhd", Buhid),
        ("buhid", Buhid),
        ("cakm", Chakma),
        ("canadianaboriginal", CanadianAboriginal),
        ("cans", CanadianAboriginal),
        ("cari", Carian),
        ("carian", Carian),
        ("caucasianalbanian", CaucasianAlbanian),
        ("chakma", Chakma),
        ("cham", Cham),
        ("cher", Cherokee),
        ("cherokee", Cherokee),
        ("chorasmian", Chorasmian),
        ("chrs", Chorasmian),
        ("common", Common),
        ("copt", Coptic),
        ("coptic", Coptic),
        ("cpmn", CyproMinoan),
        ("cprt", Cypriot),
        ("cuneiform", Cuneiform),
        ("cypriot", Cypriot),
        ("cyprominoan", CyproMinoan),
        ("cyrillic", Cyrillic),
        ("cyrl", Cyrillic),
        ("deseret", Deseret),
        ("deva", Devanagari),
        ("devanagari", Devanagari),
        ("diak", DivesAkuru),
        ("divesakuru", DivesAkuru),
        ("dogr", Dogra),
        ("dogra", Dogra),
        ("dsrt", Deseret),
        ("dupl", Duployan),
        ("duployan", Duployan),
        ("egyp", EgyptianHieroglyphs),
        ("egyptianhieroglyphs", EgyptianHieroglyphs),
        ("elba", Elbasan),
        ("elbasan", Elbasan),
        ("elym", Elymaic),
        ("elymaic", Elymaic),
        ("ethi", Ethiopic),
        ("ethiopic", Ethiopic),
        ("geor", Georgian),
        ("georgian", Georgian),
        ("glag", Glagolitic),
        ("glagolitic", Glagolitic),
        ("gong", GunjalaGondi),
        ("gonm", MasaramGondi),
        ("goth", Gothic),
        ("gothic", Gothic),
        ("gran", Grantha),
        ("grantha", Grantha),
        ("greek", Greek),
        ("grek", Greek),
        ("gujarati", Gujarati),
        ("gujr", Gujarati),
        ("gunjalagondi", GunjalaGondi),
        ("gurmukhi", Gurmukhi),
        ("guru", Gurmukhi),
        ("han", Han),
        ("hang", Hangul),
        ("hangul", Hangul),
        ("hani", Han),
        ("hanifirohingya", HanifiRohingya),
        ("hano", Hanunoo),
        ("hanunoo", Hanunoo),
        ("hatr", Hatran),
        ("hatran", Hatran),
        ("hebr", Hebrew),
        ("hebrew", Hebrew),
        ("hira", Hiragana),
        ("hiragana", Hiragana),
        ("hluw", AnatolianHieroglyphs),
        ("hmng", PahawhHmong),
        ("hmnp", NyiakengPuachueHmong),
        ("hung", OldHungarian),
        ("imperialaramaic", ImperialAramaic),
        ("inherited", Inherited),
        ("inscriptionalpahlavi", InscriptionalPahlavi),
        ("inscriptionalparthian", InscriptionalParthian),
        ("ital", OldItalic),
        ("java", Javanese),
        ("javanese", Javanese),
        ("kaithi", Kaithi),
        ("kali", KayahLi),
        ("kana", Katakana),
        ("kannada", Kannada),
        ("katakana", Katakana),
        ("kayahli", KayahLi),
        ("khar", Kharoshthi),
        ("kharoshthi", Kharoshthi),
        ("khitansmallscript", KhitanSmallScript),
        ("khmer", Khmer),
        ("khmr", Khmer),
        ("khoj", Khojki),
        ("khojki", Khojki),
        ("khudawadi", Khudawadi),
        ("kits", KhitanSmallScript),
        ("knda", Kannada),
        ("kthi", Kaithi),
        ("lana", TaiTham),
        ("lao", Lao),
        ("laoo", Lao),
        ("latin", Latin),
        ("latn", Latin),
        ("lepc", Lepcha),
        ("lepcha", Lepcha),
        ("limb", Limbu),
        ("limbu", Limbu),
        ("lina", LinearA),
        ("linb", LinearB),
        ("lineara", LinearA),
        ("linearb", LinearB),
        ("lisu", Lisu),
        ("lyci", Lycian),
        ("lycian", Lycian),
        ("lydi", Lydian),
        ("lydian", Lydian),
        ("mahajani", Mahajani),
        ("mahj", Mahajani),
        ("maka", Makasar),
        ("makasar", Makasar),
        ("malayalam", Malayalam),
        ("mand", Mandaic),
        ("mandaic", Mandaic),
        ("mani", Manichaean),
        ("manichaean", Manichaean),
        ("marc", Marchen),
        ("marchen", Marchen),
        ("masaramgondi", MasaramGondi),
        ("medefaidrin", Medefaidrin),
        ("medf", Medefaidrin),
        ("meeteimayek", MeeteiMayek),
        ("mend", MendeKikakui),
        ("mendekikakui", MendeKikakui),
        ("merc", MeroiticCursive),
        ("mero", MeroiticHieroglyphs),
        ("meroiticcursive", MeroiticCursive),
        ("meroitichieroglyphs", MeroiticHieroglyphs),
        ("miao", Miao),
        ("mlym", Malayalam),
        ("modi", Modi),
        ("mong", Mongolian),
        ("mongolian", Mongolian),
        ("mro", Mro),
        ("mroo", Mro),
        ("mtei", MeeteiMayek),
        ("mult", Multani),
        ("multani", Multani),
        ("myanmar", Myanmar),
        ("mymr", Myanmar),
        ("nabataean", Nabataean),
        ("nand", Nandinagari),
        ("nandinagari", Nandinagari),
        ("narb", OldNorthArabian),
        ("nbat", Nabataean),
        ("newa", Newa),
        ("newtailue", NewTaiLue),
        ("nko", Nko),
        ("nkoo", Nko),
        ("nshu", Nushu),
        ("nushu", Nushu),
        ("nyiakengpuachuehmong", NyiakengPuachueHmong),
        ("ogam", Ogham),
        ("ogham", Ogham),
        ("olchiki", OlChiki),
        ("olck", OlChiki),
        ("oldhungarian", OldHungarian),
        ("olditalic", OldItalic),
        ("oldnortharabian", OldNorthArabian),
        ("oldpermic", OldPermic),
        ("oldpersian", OldPersian),
        ("oldsogdian", OldSogdian),
        ("oldsoutharabian", OldSouthArabian),
        ("oldturkic", OldTurkic),
        ("olduyghur", OldUyghur),
        ("oriya", Oriya),
        ("orkh", OldTurkic),
        ("orya", Oriya),
        ("osage", Osage),
        ("osge", Osage),
        ("osma", Osmanya),
        ("osmanya", Osmanya),
        ("ougr", OldUyghur),
        ("pahawhhmong", PahawhHmong),
        ("palm", Palmyrene),
        ("palmyrene", Palmyrene),
        ("pauc", PauCinHau),
        ("paucinhau", PauCinHau),
        ("perm", OldPermic),
        ("phag", PhagsPa),
        ("phagspa", PhagsPa),
        ("phli", InscriptionalPahlavi),
        ("phlp", PsalterPahlavi),
        ("phnx", Phoenician),
        ("phoenician", Phoenician),
        ("plrd", Miao),
        ("prti", InscriptionalParthian),
        ("psalterpahlavi", PsalterPahlavi),
        ("qaac", Coptic),
        ("qaai", Inherited),
        ("rejang", Rejang),
        ("rjng", Rejang),
        ("rohg", HanifiRohingya),
        ("runic", Runic),
        ("runr", Runic),
        ("samaritan", Samaritan),
        ("samr", Samaritan),
        ("sarb", OldSouthArabian),
        ("saur", Saurashtra),
        ("saurashtra", Saurashtra),
        ("sgnw", Signwriting),
        ("sharada", Sharada),
        ("shavian", Shavian),
        ("shaw", Shavian),
        ("shrd", Sharada),
        ("sidd", Siddham),
        ("siddham", Siddham),
        ("signwriting", Signwriting),
        ("sind", Khudawadi),
        ("sinh", Sinhala),
        ("sinhala", Sinhala),
        ("sogd", Sogdian),
        ("sogdian", Sogdian),
        ("sogo", OldSogdian),
        ("sora", SoraSompeng),
        ("sorasompeng", SoraSompeng),
        ("soyo", Soyombo),
        ("soyombo", Soyombo),
        ("sund", Sundanese),
        ("sundanese", Sundanese),
        ("sylo", SylotiNagri),
        ("sylotinagri", SylotiNagri),
        ("syrc", Syriac),
        ("syriac", Syriac),
        ("tagalog", Tagalog),
        ("tagb", Tagbanwa),
        ("tagbanwa", Tagbanwa),
        ("taile", TaiLe),
        ("taitham", TaiTham),
        ("taiviet", TaiViet),
        ("takr", Takri),
        ("takri", Takri),
        ("tale", TaiLe),
        ("talu", NewTaiLue),
        ("tamil", Tamil),
        ("taml", Tamil),
        ("tang", Tangut),
        ("tangsa", Tangsa),
        ("tangut", Tangut),
        ("tavt", TaiViet),
        ("telu", Telugu),
        ("telugu", Telugu),
        ("tfng", Tifinagh),
        ("tglg", Tagalog),
        ("thaa", Thaana),
        ("thaana", Thaana),
        ("thai", Thai),
        ("tibetan", Tibetan),
        ("tibt", Tibetan),
        ("tifinagh", Tifinagh),
        ("tirh", Tirhuta),
        ("tirhuta", Tirhuta),
        ("tnsa", Tangsa),
        ("toto", Toto),
        ("ugar", Ugaritic),
        ("ugaritic", Ugaritic),
        ("unknown", Unknown),
        ("vai", Vai),
        ("vaii", Vai),
        ("vith", Vithkuqi),
        ("vithkuqi", Vithkuqi),
        ("wancho", Wancho),
        ("wara", WarangCiti),
        ("warangciti", WarangCiti),
        ("wcho", Wancho),
        ("xpeo", OldPersian),
        ("xsux", Cuneiform),
        ("yezi", Yezidi),
        ("yezidi", Yezidi),
        ("yi", Yi),
        ("yiii", Yi),
        ("zanabazarsquare", ZanabazarSquare),
        ("zanb", ZanabazarSquare),
        ("zinh", Inherited),
        ("zyyy", Common),
        ("zzzz", Unknown),
    ];
}

pub(crate) mod canonical_combining_class {
    pub(crate) const CANONICAL_COMBINING_CLASS_TABLE: &[(u32, u32, u8)] = &[
        (0x0300, 0x0314, 230),
        (0x0315, 0x0315, 232),
        (0x0316, 0x0319, 220),
        (0x031A, 0x031A, 232),
        (0x031B, 0x031B, 216),
        (0x031C, 0x0320, 220),
        (0x0321, 0x0322, 202),
        (0x0323, 0x0326, 220),
        (0x0327, 0x0328, 202),
        (0x0329, 0x0333, 220),
        (0x0334, 0x0338, 1),
        (0x0339, 0x033C, 220),
        (0x033D, 0x0344, 230),
        (0x0345, 0x0345, 240),
        (0x0346, 0x0346, 230),
        (0x0347, 0x0349, 220),
        (0x034A, 0x034C, 230),
        (0x034D, 0x034E, 220),
        (0x0350, 0x0352, 230),
        (0x0353, 0x0356, 220),
        (0x0357, 0x0357, 230),
        (0x0358, 0x0358, 232),
        (0x0359, 0x035A, 220),
        (0x035B, 0x035B, 230),
        (0x035C, 0x035C, 233),
        (0x035D, 0x035E, 234),
        (0x035F, 0x035F, 233),
        (0x0360, 0x0361, 234),
        (0x0362, 0x0362, 233),
        (0x0363, 0x036F, 230),
        (0x0483, 0x0487, 230),
        (0x0591, 0x0591, 220),
        (0x0592, 0x0595, 230),
        (0x0596, 0x0596, 220),
        (0x0597, 0x0599, 230),
        (0x059A, 0x059A, 222),
        (0x059B, 0x059B, 220),
        (0x059C, 0x05A1, 230),
        (0x05A2, 0x05A7, 220),
        (0x05A8, 0x05A9, 230),
        (0x05AA, 0x05AA, 220),
        (0x05AB, 0x05AC, 230),
        (0x05AD, 0x05AD, 222),
        (0x05AE, 0x05AE, 228),
        (0x05AF, 0x05AF, 230),
        (0x05B0, 0x05B0, 10),
        (0x05B1, 0x05B1, 11),
        (0x05B2, 0x05B2, 12),
        (0x05B3, 0x05B3, 13),
        (0x05B4, 0x05B4, 14),
        (0x05B5, 0x05B5, 15),
        (0x05B6, 0x05B6, 16),
        (0x05B7, 0x05B7, 17),
        (0x05B8, 0x05B8, 18),
        (0x05B9, 0x05BA, 19),
        (0x05BB, 0x05BB, 20),
        (0x05BC, 0x05BC, 21),
        (0x05BD, 0x05BD, 22),
        (0x05BF, 0x05BF, 23),
        (0x05C1, 0x05C1, 24),
        (0x05C2, 0x05C2, 25),
        (0x05C4, 0x05C4, 230),
        (0x05C5, 0x05C5, 220),
        (0x05C7, 0x05C7, 18),
        (0x0610, 0x0617, 230),
        (0x0618, 0x0618, 30),
        (0x0619, 0x0619, 31),
        (0x061A, 0x061A, 32),
        (0x064B, 0x064B, 27),
        (0x064C, 0x064C, 28),
        (0x064D, 0x064D, 29),
        (0x064E, 0x064E, 30),
        (0x064F, 0x064F, 31),
        (0x0650, 0x0650, 32),
        (0x0651, 0x0651, 33),
        (0x0652, 0x0652, 34),
        (0x0653, 0x0654, 230),
        (0x0655, 0x0656, 220),
        (0x0657, 0x065B, 230),
        (0x065C, 0x065C, 220),
        (0x065D, 0x065E, 230),
        (0x065F, 0x065F, 220),
        (0x0670, 0x0670, 35),
        (0x06D6, 0x06DC, 230),
        (0x06DF, 0x06E2, 230),
        (0x06E3, 0x06E3, 220),
        (0x06E4, 0x06E4, 230),
        (0x06E7, 0x06E8, 230),
        (0x06EA, 0x06EA, 220),
        (0x06EB, 0x06EC, 230),
        (0x06ED, 0x06ED, 220),
        (0x0711, 0x0711, 36),
        (0x0730, 0x0730, 230),
        (0x0731, 0x0731, 220),
        (0x0732, 0x0733, 230),
        (0x0734, 0x0734, 220),
        (0x0735, 0x0736, 230),
        (0x0737, 0x0739, 220),
        (0x073A, 0x073A, 230),
        (0x073B, 0x073C, 220),
        (0x073D, 0x073D, 230),
        (0x073E, 0x073E, 220),
        (0x073F, 0x0741, 230),
        (0x0742, 0x0742, 220),
        (0x0743, 0x0743, 230),
        (0x0744, 0x0744, 220),
        (0x0745, 0x0745, 230),
        (0x0746, 0x0746, 220),
        (0x0747, 0x0747, 230),
        (0x0748, 0x0748, 220),
        (0x0749, 0x074A, 230),
        (0x07EB, 0x07F1, 230),
        (0x07F2, 0x07F2, 220),
        (0x07F3, 0x07F3, 230),
        (0x07FD, 0x07FD, 220),
        (0x0816, 0x0819, 230),
        (0x081B, 0x0823, 230),
        (0x0825, 0x0827, 230),
        (0x0829, 0x082D, 230),
        (0x0859, 0x085B, 220),
        (0x0898, 0x0898, 230),
        (0x0899, 0x089B, 220),
        (0x089C, 0x089F, 230),
        (0x08CA, 0x08CE, 230),
        (0x08CF, 0x08D3, 220),
        (0x08D4, 0x08E1, 230),
        (0x08E3, 0x08E3, 220),
        (0x08E4, 0x08E5, 230),
        (0x08E6, 0x08E6, 220),
        (0x08E7, 0x08E8, 230),
        (0x08E9, 0x08E9, 220),
        (0x08EA, 0x08EC, 230),
        (0x08ED, 0x08EF, 220),
        (0x08F0, 0x08F0, 27),
        (0x08F1, 0x08F1, 28),
        (0x08F2, 0x08F2, 29),
        (0x08F3, 0x08F5, 230),
        (0x08F6, 0x08F6, 220),
        (0x08F7, 0x08F8, 230),
        (0x08F9, 0x08FA, 220),
        (0x08FB, 0x08FF, 230),
        (0x093C, 0x093C, 7),
        (0x094D, 0x094D, 9),
        (0x0951, 0x0951, 230),
        (0x0952, 0x0952, 220),
        (0x0953, 0x0954, 230),
        (0x09BC, 0x09BC, 7),
        (0x09CD, 0x09CD, 9),
        (0x09FE, 0x09FE, 230),
        (0x0A3C, 0x0A3C, 7),
        (0x0A4D, 0x0A4D, 9),
        (0x0ABC, 0x0ABC, 7),
        (0x0ACD, 0x0ACD, 9),
        (0x0B3C, 0x0B3C, 7),
        (0x0B4D, 0x0B4D, 9),
        (0x0BCD, 0x0BCD, 9),
        (0x0C3C, 0x0C3C, 7),
        (0x0C4D, 0x0C4D, 9),
        (0x0C55, 0x0C55, 84),
        (0x0C56, 0x0C56, 91),
        (0x0CBC, 0x0CBC, 7),
        (0x0CCD, 0x0CCD, 9),
        (0x0D3B, 0x0D3C, 9),
        (0x0D4D, 0x0D4D, 9),
        (0x0DCA, 0x0DCA, 9),
        (0x0E38, 0x0E39, 103),
        (0x0E3A, 0x0E3A, 9),
        (0x0E48, 0x0E4B, 107),
        (0x0EB8, 0x0EB9, 118),
        (0x0EBA, 0x0EBA, 9),
        (0x0EC8, 0x0ECB, 122),
        (0x0F18, 0x0F19, 220),
        (0x0F35, 0x0F35, 220),
        (0x0F37, 0x0F37, 220),
        (0x0F39, 0x0F39, 216),
        (0x0F71, 0x0F71, 129),
        (0x0F72, 0x0F72, 130),
        (0x0F74, 0x0F74, 132),
        (0x0F7A, 0x0F7D, 130),
        (0x0F80, 0x0F80, 130),
        (0x0F82, 0x0F83, 230),
        (0x0F84, 0x0F84, 9),
        (0x0F86, 0x0F87, 230),
        (0x0FC6, 0x0FC6, 220),
        (0x1037, 0x1037, 7),
        (0x1039, 0x103A, 9),
        (0x108D, 0x108D, 220),
        (0x135D, 0x135F, 230),
        (0x1714, 0x1715, 9),
        (0x1734, 0x1734, 9),
        (0x17D2, 0x17D2, 9),
        (0x17DD, 0x17DD, 230),
        (0x18A9, 0x18A9, 228),
        (0x1939, 0x1939, 222),
        (0x193A, 0x193A, 230),
        (0x193B, 0x193B, 220),
        (0x1A17, 0x1A17, 230),
        (0x1A18, 0x1A18, 220),
        (0x1A60, 0x1A60, 9),
        (0x1A75, 0x1A7C, 230),
        (0x1A7F, 0x1A7F, 220),
        (0x1AB0, 0x1AB4, 230),
        (0x1AB5, 0x1ABA, 220),
        (0x1ABB, 0x1ABC, 230),
        (0x1ABD, 0x1ABD, 220),
        (0x1ABF, 0x1AC0, 220),
        (0x1AC1, 0x1AC2, 230),
        (0x1AC3, 0x1AC4, 220),
        (0x1AC5, 0x1AC9, 230),
        (0x1ACA, 0x1ACA, 220),
        (0x1ACB, 0x1ACE, 230),
        (0x1B34, 0x1B34, 7),
        (0x1B44, 0x1B44, 9),
        (0x1B6B, 0x1B6B, 230),
        (0x1B6C, 0x1B6C, 220),
        (0x1B6D, 0x1B73, 230),
        (0x1BAA, 0x1BAB, 9),
        (0x1BE6, 0x1BE6, 7),
        (0x1BF2, 0x1BF3, 9),
        (0x1C37, 0x1C37, 7),
        (0x1CD0, 0x1CD2, 230),
        (0x1CD4, 0x1CD4, 1),
        (0x1CD5, 0x1CD9, 220),
        (0x1CDA, 0x1CDB, 230),
        (0x1CDC, 0x1CDF, 220),
        (0x1CE0, 0x1CE0, 230),
        (0x1CE2, 0x1CE8, 1),
        (0x1CED, 0x1CED, 220),
        (0x1CF4, 0x1CF4, 230),
        (0x1CF8, 0x1CF9, 230),
        (0x1DC0, 0x1DC1, 230),
        (0x1DC2, 0x1DC2, 220),
        (0x1DC3, 0x1DC9, 230),
        (0x1DCA, 0x1DCA, 220),
        (0x1DCB, 0x1DCC, 230),
        (0x1DCD, 0x1DCD, 234),
        (0x1DCE, 0x1DCE, 214),
        (0x1DCF, 0x1DCF, 220),
        (0x1DD0, 0x1DD0, 202),
        (0x1DD1, 0x1DF5, 230),
        (0x1DF6, 0x1DF6, 232),
        (0x1DF7, 0x1DF8, 228),
        (0x1DF9, 0x1DF9, 220),
        (0x1DFA, 0x1DFA, 218),
        (0x1DFB, 0x1DFB, 230),
        (0x1DFC, 0x1DFC, 233),
        (0x1DFD, 0x1DFD, 220),
        (0x1DFE, 0x1DFE, 230),
        (0x1DFF, 0x1DFF, 220),
        (0x20D0, 0x20D1, 230),
        (0x20D2, 0x20D3, 1),
        (0x20D4, 0x20D7, 230),
        (0x20D8, 0x20DA, 1),
        (0x20DB, 0x20DC, 230),
        (0x20E1, 0x20E1, 230),
        (0x20E5, 0x20E6, 1),
        (0x20E7, 0x20E7, 230),
        (0x20E8, 0x20E8, 220),
        (0x20E9, 0x20E9, 230),
        (0x20EA, 0x20EB, 1),
        (0x20EC, 0x20EF, 220),
        (0x20F0, 0x20F0, 230),
        (0x2CEF, 0x2CF1, 230),
        (0x2D7F, 0x2D7F, 9),
        (0x2DE0, 0x2DFF, 230),
        (0x302A, 0x302A, 218),
        (0x302B, 0x302B, 228),
        (0x302C, 0x302C, 232),
        (0x302D, 0x302D, 222),
        (0x302E, 0x302F, 224),
        (0x3099, 0x309A, 8),
        (0xA66F, 0xA66F, 230),
        (0xA674, 0xA67D, 230),
        (0xA69E, 0xA69F, 230),
        (0xA6F0, 0xA6F1, 230),
        (0xA806, 0xA806, 9),
        (0xA82C, 0xA82C, 9),
        (0xA8C4, 0xA8C4, 9),
        (0xA8E0, 0xA8F1, 230),
        (0xA92B, 0xA92D, 220),
        (0xA953, 0xA953, 9),
        (0xA9B3, 0xA9B3, 7),
        (0xA9C0, 0xA9C0, 9),
        (0xAAB0, 0xAAB0, 230),
        (0xAAB2, 0xAAB3, 230),
        (0xAAB4, 0xAAB4, 220),
        (0xAAB7, 0xAAB8, 230),
        (0xAABE, 0xAABF, 230),
        (0xAAC1, 0xAAC1, 230),
        (0xAAF6, 0xAAF6, 9),
        (0xABED, 0xABED, 9),
        (0xFB1E, 0xFB1E, 26),
        (0xFE20, 0xFE26, 230),
        (0xFE27, 0xFE2D, 220),
        (0xFE2E, 0xFE2F, 230),
        (0x101FD, 0x101FD, 220),
        (0x102E0, 0x102E0, 220),
        (0x10376, 0x1037A, 230),
        (0x10A0D, 0x10A0D, 220),
        (0x10A0F, 0x10A0F, 230),
        (0x10A38, 0x10A38, 230),
        (0x10A39, 0x10A39, 1),
        (0x10A3A, 0x10A3A, 220),
        (0x10A3F, 0x10A3F, 9),
        (0x10AE5, 0x10AE5, 230),
        (0x10AE6, 0x10AE6, 220),
        (0x10D24, 0x10D27, 230),
        (0x10EAB, 0x10EAC, 230),
        (0x10F46, 0x10F47, 220),
        (0x10F48, 0x10F4A, 230),
        (0x10F4B, 0x10F4B, 220),
        (0x10F4C, 0x10F4C, 230),
        (0x10F4D, 0x10F50, 220),
        (0x10F82, 0x10F82, 230),
        (0x10F83, 0x10F83, 220),
        (0x10F84, 0x10F84, 230),
        (0x10F85, 0x10F85, 220),
        (0x11046, 0x11046, 9),
        (0x11070, 0x11070, 9),
        (0x1107F, 0x1107F, 9),
        (0x110B9, 0x110B9, 9),
        (0x110BA, 0x110BA, 7),
        (0x11100, 0x11102, 230),
        (0x11133, 0x11134, 9),
        (0x11173, 0x11173, 7),
        (0x111C0, 0x111C0, 9),
        (0x111CA, 0x111CA, 7),
        (0x11235, 0x11235, 9),
        (0x11236, 0x11236, 7),
        (0x112E9, 0x112E9, 7),
        (0x112EA, 0x112EA, 9),
        (0x1133B, 0x1133C, 7),
        (0x1134D, 0x1134D, 9),
        (0x11366, 0x1136C, 230),
        (0x11370, 0x11374, 230),
        (0x11442, 0x11442, 9),
        (0x11446, 0x11446, 7),
        (0x1145E, 0x1145E, 230),
        (0x114C2, 0x114C2, 9),
        (0x114C3, 0x114C3, 7),
        (0x115BF, 0x115BF, 9),
        (0x115C0, 0x115C0, 7),
        (0x1163F, 0x1163F, 9),
        (0x116B6, 0x116B6, 9),
        (0x116B7, 0x116B7, 7),
        (0x1172B, 0x1172B, 9),
        (0x11839, 0x11839, 9),
        (0x1183A, 0x1183A, 7),
        (0x1193D, 0x1193E, 9),
        (0x11943, 0x11943, 7),
        (0x119E0, 0x119E0, 9),
        (0x11A34, 0x11A34, 9),
        (0x11A47, 0x11A47, 9),
        (0x11A99, 0x11A99, 9),
        (0x11C3F, 0x11C3F, 9),
        (0x11D42, 0x11D42, 7),
        (0x11D44, 0x11D45, 9),
        (0x11D97, 0x11D97, 9),
        (0x16AF0, 0x16AF4, 1),
        (0x16B30, 0x16B36, 230),
        (0x16FF0, 0x16FF1, 6),
        (0x1BC9E, 0x1BC9E, 1),
        (0x1D165, 0x1D166, 216),
        (0x1D167, 0x1D169, 1),
        (0x1D16D, 0x1D16D, 226),
        (0x1D16E, 0x1D172, 216),
        (0x1D17B, 0x1D182, 220),
        (0x1D185, 0x1D189, 230),
        (0x1D18A, 0x1D18B, 220),
        (0x1D1AA, 0x1D1AD, 230),
        (0x1D242, 0x1D244, 230),
        (0x1E000, 0x1E006, 230),
        (0x1E008, 0x1E018, 230),
        (0x1E01B, 0x1E021, 230),
        (0x1E023, 0x1E024, 230),
        (0x1E026, 0x1E02A, 230),
        (0x1E130, 0x1E136, 230),
        (0x1E2AE, 0x1E2AE, 230),
        (0x1E2EC, 0x1E2EF, 230),
        (0x1E8D0, 0x1E8D6, 220),
        (0x1E944, 0x1E949, 230),
        (0x1E94A, 0x1E94A, 7),
    ];
}

pub(crate) mod binary_property {
    pub(crate) const ALPHABETIC: &[(u32, u32)] = &[
        (0x0041, 0x005A),
        (0x0061, 0x007A),
        (0x00AA, 0x00AA),
        (0x00B5, 0x00B5),
        (0x00BA, 0x00BA),
        (0x00C0, 0x00D6),
        (0x00D8, 0x00F6),
        (0x00F8, 0x02C1),
        (0x02C6, 0x02D1),
        (0x02E0, 0x02E4),
        (0x02EC, 0x02EC),
        (0x02EE, 0x02EE),
        (0x0345, 0x0345),
        (0x0370, 0x0374),
        (0x0376, 0x0377),
        (0x037A, 0x037D),
        (0x037F, 0x037F),
        (0x0386, 0x0386),
        (0x0388, 0x038A),
        (0x038C, 0x038C),
        (0x038E, 0x03A1),
        (0x03A3, 0x03F5),
        (0x03F7, 0x0481),
        (0x048A, 0x052F),
        (0x0531, 0x0556),
        (0x0559, 0x0559),
        (0x0560, 0x0588),
        (0x05B0, 0x05BD),
        (0x05BF, 0x05BF),
        (0x05C1, 0x05C2),
        (0x05C4, 0x05C5),
        (0x05C7, 0x05C7),
        (0x05D0, 0x05EA),
        (0x05EF, 0x05F2),
        (0x0610, 0x061A),
        (0x0620, 0x0657),
        (0x0659, 0x065F),
        (0x066E, 0x06D3),
        (0x06D5, 0x06DC),
        (0x06E1, 0x06E8),
        (0x06ED, 0x06EF),
        (0x06FA, 0x06FC),
        (0x06FF, 0x06FF),
        (0x0710, 0x073F),
        (0x074D, 0x07B1),
        (0x07CA, 0x07EA),
        (0x07F4, 0x07F5),
        (0x07FA, 0x07FA),
        (0x0800, 0x0817),
        (0x081A, 0x082C),
        (0x0840, 0x0858),
        (0x0860, 0x086A),
        (0x0870, 0x0887),
        (0x0889, 0x088E),
        (0x08A0, 0x08C9),
        (0x08D4, 0x08DF),
        (0x08E3, 0x08E9),
        (0x08F0, 0x093B),
        (0x093D, 0x094C),
        (0x094E, 0x0950),
        (0x0955, 0x0963),
        (0x0971, 0x0983),
        (0x0985, 0x098C),
        (0x098F, 0x0990),
        (0x0993, 0x09A8),
        (0x09AA, 0x09B0),
        (0x09B2, 0x09B2),
        (0x09B6, 0x09B9),
        (0x09BD, 0x09C4),
        (0x09C7, 0x09C8),
        (0x09CB, 0x09CC),
        (0x09CE, 0x09CE),
        (0x09D7, 0x09D7),
        (0x09DC, 0x09DD),
        (0x09DF, 0x09E3),
        (0x09F0, 0x09F1),
        (0x09FC, 0x09FC),
        (0x0A01, 0x0A03),
        (0x0A05, 0x0A0A),
        (0x0A0F, 0x0A10),
        (0x0A13, 0x0A28),
        (0x0A2A, 0x0A30),
        (0x0A32, 0x0A33),
        (0x0A35, 0x0A36),
        (0x0A38, 0x0A39),
        (0x0A3E, 0x0A42),
        (0x0A47, 0x0A48),
        (0x0A4B, 0x0A4C),
        (0x0A51, 0x0A51),
        (0x0A59, 0x0A5C),
        (0x0A5E, 0x0A5E),
        (0x0A70, 0x0A75),
        (0x0A81, 0x0A83),
        (0x0A85, 0x0A8D),
        (0x0A8F, 0x0A91),
        (0x0A93, 0x0AA8),
        (0x0AAA, 0x0AB0),
        (0x0AB2, 0x0AB3),
        (0x0AB5, 0x0AB9),
        (0x0ABD, 0x0AC5),
        (0x0AC7, 0x0AC9),
        (0x0ACB, 0x0ACC),
        (0x0AD0, 0x0AD0),
        (0x0AE0, 0x0AE3),
        (0x0AF9, 0x0AFC),
        (0x0B01, 0x0B03),
        (0x0B05, 0x0B0C),
        (0x0B0F, 0x0B10),
        (0x0B13, 0x0B28),
        (0x0B2A, 0x0B30),
        (0x0B32, 0x0B33),
        (0x0B35, 0x0B39),
        (0x0B3D, 0x0B44),
        (0x0B47, 0x0B48),
        (0x0B4B, 0x0B4C),
        (0x0B56, 0x0B57),
        (0x0B5C, 0x0B5D),
        (0x0B5F, 0x0B63),
        (0x0B71, 0x0B71),
        (0x0B82, 0x0B83),
        (0x0B85, 0x0B8A),
        (0x0B8E, 0x0B90),
        (0x0B92, 0x0B95),
        (0x0B99, 0x0B9A),
        (0x0B9C, 0x0B9C),
        (0x0B9E, 0x0B9F),
        (0x0BA3, 0x0BA4),
        (0x0BA8, 0x0BAA),
        (0x0BAE, 0x0BB9),
        (0x0BBE, 0x0BC2),
        (0x0BC6, 0x0BC8),
        (0x0BCA, 0x0BCC),
        (0x0BD0, 0x0BD0),
        (0x0BD7, 0x0BD7),
        (0x0C00, 0x0C03),
        (0x0C05, 0x0C0C),
        (0x0C0E, 0x0C10),
        (0x0C12, 0x0C28),
        (0x0C2A, 0x0C39),
        (0x0C3D, 0x0C44),
        (0x0C46, 0x0C48),
        (0x0C4A, 0x0C4C),
        (0x0C55, 0x0C56),
        (0x0C58, 0x0C5A),
        (0x0C5D, 0x0C5D),
        (0x0C60, 0x0C63),
        (0x0C80, 0x0C83),
        (0x0C85, 0x0C8C),
        (0x0C8E, 0x0C90),
        (0x0C92, 0x0CA8),
        (0x0CAA, 0x0CB3),
        (0x0CB5, 0x0CB9),
        (0x0CBD, 0x0CC4),
        (0x0CC6, 0x0CC8),
        (0x0CCA, 0x0CCC),
        (0x0CD5, 0x0CD6),
        (0x0CDD, 0x0CDE),
        (0x0CE0, 0x0CE3),
        (0x0CF1, 0x0CF2),
        (0x0D00, 0x0D0C),
        (0x0D0E, 0x0D10),
        (0x0D12, 0x0D3A),
        (0x0D3D, 0x0D44),
        (0x0D46, 0x0D48),
        (0x0D4A, 0x0D4C),
        (0x0D4E, 0x0D4E),
        (0x0D54, 0x0D57),
        (0x0D5F, 0x0D63),
        (0x0D7A, 0x0D7F),
        (0x0D81, 0x0D83),
        (0x0D85, 0x0D96),
        (0x0D9A, 0x0DB1),
        (0x0DB3, 0x0DBB),
        (0x0DBD, 0x0DBD),
        (0x0DC0, 0x0DC6),
        (0x0DCF, 0x0DD4),
        (0x0DD6, 0x0DD6),
        (0x0DD8, 0x0DDF),
        (0x0DF2, 0x0DF3),
        (0x0E01, 0x0E3A),
        (0x0E40, 0x0E46),
        (0x0E4D, 0x0E4D),
        (0x0E81, 0x0E82),
        (0x0E84, 0x0E84),
        (0x0E86, 0x0E8A),
        (0x0E8C, 0x0EA3),
        (0x0EA5, 0x0EA5),
        (0x0EA7, 0x0EB9),
        (0x0EBB, 0x0EBD),
        (0x0EC0, 0x0EC4),
        (0x0EC6, 0x0EC6),
        (0x0ECD, 0x0ECD),
        (0x0EDC, 0x0EDF),
        (0x0F00, 0x0F00),
        (0x0F40, 0x0F47),
        (0x0F49, 0x0F6C),
        (0x0F71, 0x0F81),
        (0x0F88, 0x0F97),
        (0x0F99, 0x0FBC),
        (0x1000, 0x1036),
        (0x1038, 0x1038),
        (0x103B, 0x103F),
        (0x1050, 0x108F),
        (0x109A, 0x109D),
        (0x10A0, 0x10C5),
        (0x10C7, 0x10C7),
        (0x10CD, 0x10CD),
        (0x10D0, 0x10FA),
        (0x10FC, 0x1248),
        (0x124A, 0x124D),
        (0x1250, 0x1256),
        (0x1258, 0x1258),
        (0x125A, 0x125D),
        (0x1260, 0x1288),
        (0x128A, 0x128D),
        (0x1290, 0x12B0),
        (0x12B2, 0x12B5),
        (0x12B8, 0x12BE),
        (0x12C0, 0x12C0),
        (0x12C2, 0x12C5),
        (0x12C8, 0x12D6),
        (0x12D8, 0x1310),
        (0x1312, 0x1315),
        (0x1318, 0x135A),
        (0x1380, 0x138F),
        (0x13A0, 0x13F5),
        (0x13F8, 0x13FD),
        (0x1401, 0x166C),
        (0x166F, 0x167F),
        (0x1681, 0x169A),
        (0x16A0, 0x16EA),
        (0x16EE, 0x16F8),
        (0x1700, 0x1713),
        (0x171F, 0x1733),
        (0x1740, 0x1753),
        (0x1760, 0x176C),
        (0x176E, 0x1770),
        (0x1772, 0x1773),
        (0x1780, 0x17B3),
        (0x17B6, 0x17C8),
        (0x17D7, 0x17D7),
        (0x17DC, 0x17DC),
        (0x1820, 0x1878),
        (0x1880, 0x18AA),
        (0x18B0, 0x18F5),
        (0x1900, 0x191E),
        (0x1920, 0x192B),
        (0x1930, 0x1938),
        (0x1950, 0x196D),
        (0x1970, 0x1974),
        (0x1980, 0x19AB),
        (0x19B0, 0x19C9),
        (0x1A00, 0x1A1B),
        (0x1A20, 0x1A5E),
        (0x1A61, 0x1A74),
        (0x1AA7, 0x1AA7),
        (0x1ABF, 0x1AC0),
        (0x1ACC, 0x1ACE),
        (0x1B00, 0x1B33),
        (0x1B35, 0x1B43),
        (0x1B45, 0x1B4C),
        (0x1B80, 0x1BA9),
        (0x1BAC, 0x1BAF),
        (0x1BBA, 0x1BE5),
        (0x1BE7, 0x1BF1),
        (0x1C00, 0x1C36),
        (0x1C4D, 0x1C4F),
        (0x1C5A, 0x1C7D),
        (0x1C80, 0x1C88),
        (0x1C90, 0x1CBA),
        (0x1CBD, 0x1CBF),
        (0x1CE9, 0x1CEC),
        (0x1CEE, 0x1CF3),
        (0x1CF5, 0x1CF6),
        (0x1CFA, 0x1CFA),
        (0x1D00, 0x1DBF),
        (0x1DE7, 0x1DF4),
        (0x1E00, 0x1F15),
        (0x1F18, 0x1F1D),
        (0x1F20, 0x1F45),
        (0x1F48, 0x1F4D),
        (0x1F50, 0x1F57),
        (0x1F59, 0x1F59),
        (0x1F5B, 0x1F5B),
        (0x1F5D, 0x1F5D),
        (0x1F5F, 0x1F7D),
        (0x1F80, 0x1FB4),
        (0x1FB6, 0x1FBC),
        (0x1FBE, 0x1FBE),
        (0x1FC2, 0x1FC4),
        (0x1FC6, 0x1FCC),
        (0x1FD0, 0x1FD3),
        (0x1FD6, 0x1FDB),
        (0x1FE0, 0x1FEC),
        (0x1FF2, 0x1FF4),
        (0x1FF6, 0x1FFC),
        (0x2071, 0x2071),
        (0x207F, 0x207F),
        (0x2090, 0x209C),
        (0x2102, 0x2102),
        (0x2107, 0x2107),
        (0x210A, 0x2113),
        (0x2115, 0x2115),
        (0x2119, 0x211D),
        (0x2124, 0x2124),
        (0x2126, 0x2126),
        (0x2128, 0x2128),
        (0x212A, 0x212D),
        (0x212F, 0x2139),
        (0x213C, 0x213F),
        (0x2145, 0x2149),
        (0x214E, 0x214E),
        (0x2160, 0x2188),
        (0x24B6, 0x24E9),
        (0x2C00, 0x2CE4),
        (0x2CEB, 0x2CEE),
        (0x2CF2, 0x2CF3),
        (0x2D00, 0x2D25),
        (0x2D27, 0x2D27),
        (0x2D2D, 0x2D2D),
        (0x2D30, 0x2D67),
        (0x2D6F, 0x2D6F),
        (0x2D80, 0x2D96),
        (0x2DA0, 0x2DA6),
        (0x2DA8, 0x2DAE),
        (0x2DB0, 0x2DB6),
        (0x2DB8, 0x2DBE),
        (0x2DC0, 0x2DC6),
        (0x2DC8, 0x2DCE),
        (0x2DD0, 0x2DD6),
        (0x2DD8, 0x2DDE),
        (0x2DE0, 0x2DFF),
        (0x2E2F, 0x2E2F),
        (0x3005, 0x3007),
        (0x3021, 0x3029),
        (0x3031, 0x3035),
        (0x3038, 0x303C),
        (0x3041, 0x3096),
        (0x309D, 0x309F),
        (0x30A1, 0x30FA),
        (0x30FC, 0x30FF),
        (0x3105, 0x312F),
        (0x3131, 0x318E),
        (0x31A0, 0x31BF),
        (0x31F0, 0x31FF),
        (0x3400, 0x4DBF),
        (0x4E00, 0xA48C),
        (0xA4D0, 0xA4FD),
        (0xA500, 0xA60C),
        (0xA610, 0xA61F),
        (0xA62A, 0xA62B),
        (0xA640, 0xA66E),
        (0xA674, 0xA67B),
        (0xA67F, 0xA6EF),
        (0xA717, 0xA71F),
        (0xA722, 0xA788),
        (0xA78B, 0xA7CA),
        (0xA7D0, 0xA7D1),
        (0xA7D3, 0xA7D3),
        (0xA7D5, 0xA7D9),
        (0xA7F2, 0xA805),
        (0xA807, 0xA827),
        (0xA840, 0xA873),
        (0xA880, 0xA8C3),
        (0xA8C5, 0xA8C5),
        (0xA8F2, 0xA8F7),
        (0xA8FB, 0xA8FB),
        (0xA8FD, 0xA8FF),
        (0xA90A, 0xA92A),
        (0xA930, 0xA952),
        (0xA960, 0xA97C),
        (0xA980, 0xA9B2),
        (0xA9B4, 0xA9BF),
        (0xA9CF, 0xA9CF),
        (0xA9E0, 0xA9EF),
        (0xA9FA, 0xA9FE),
        (0xAA00, 0xAA36),
        (0xAA40, 0xAA4D),
        (0xAA60, 0xAA76),
        (0xAA7A, 0xAABE),
        (0xAAC0, 0xAAC0),
        (0xAAC2, 0xAAC2),
        (0xAADB, 0xAADD),
        (0xAAE0, 0xAAEF),
        (0xAAF2, 0xAAF5),
        (0xAB01, 0xAB06),
        (0xAB09, 0xAB0E),
        (0xAB11, 0xAB16),
        (0xAB20, 0xAB26),
        (0xAB28, 0xAB2E),
        (0xAB30, 0xAB5A),
        (0xAB5C, 0xAB69),
        (0xAB70, 0xABEA),
        (0xAC00, 0xD7A3),
        (0xD7B0, 0xD7C6),
        (0xD7CB, 0xD7FB),
        (0xF900, 0xFA6D),
        (0xFA70, 0xFAD9),
        (0xFB00, 0xFB06),
        (0xFB13, 0xFB17),
        (0xFB1D, 0xFB28),
        (0xFB2A, 0xFB36),
        (0xFB38, 0xFB3C),
        (0xFB3E, 0xFB3E),
        (0xFB40, 0xFB41),
        (0xFB43, 0xFB44),
        (0xFB46, 0xFBB1),
        (0xFBD3, 0xFD3D),
        (0xFD50, 0xFD8F),
        (0xFD92, 0xFDC7),
        (0xFDF0, 0xFDFB),
        (0xFE70, 0xFE74),
        (0xFE76, 0xFEFC),
        (0xFF21, 0xFF3A),
        (0xFF41, 0xFF5A),
        (0xFF66, 0xFFBE),
        (0xFFC2, 0xFFC7),
        (0xFFCA, 0xFFCF),
        (0xFFD2, 0xFFD7),
        (0xFFDA, 0xFFDC),
        (0x10000, 0x1000B),
        (0x1000D, 0x10026),
        (0x10028, 0x1003A),
        (0x1003C, 0x1003D),
        (0x1003F, 0x1004D),
        (0x10050, 0x1005D),
        (0x10080, 0x100FA),
        (0x10140, 0x10174),
        (0x10280, 0x1029C),
        (0x102A0, 0x102D0),
        (0x10300, 0x1031F),
        (0x1032D, 0x1034A),
        (0x10350, 0x1037A),
        (0x10380, 0x1039D),
        (0x103A0, 0x103C3),
        (0x103C8, 0x103CF),
        (0x103D1, 0x103D5),
        (0x10400, 0x1049D),
        (0x104B0, 0x104D3),
        (0x104D8, 0x104FB),
        (0x10500, 0x10527),
        (0x10530, 0x10563),
        (0x10570, 0x1057A),
        (0x1057C, 0x1058A),
        (0x1058C, 0x10592),
        (0x10594, 0x10595),
        (0x10597, 0x105A1),
        (0x105A3, 0x105B1),
        (0x105B3, 0x105B9),
        (0x105BB, 0x105BC),
        (0x10600, 0x10736),
        (0x10740, 0x10755),
        (0x10760, 0x10767),
        (0x10780, 0x10785),
        (0x10787, 0x107B0),
        (0x107B2, 0x107BA),
        (0x10800, 0x10805),
        (0x10808, 0x10808),
        (0x1080A, 0x10835),
        (0x10837, 0x10838),
        (0x1083C, 0x1083C),
        (0x1083F, 0x10855),
        (0x10860, 0x10876),
        (0x10880, 0x1089E),
        (0x108E0, 0x108F2),
        (0x108F4, 0x108F5),
        (0x10900, 0x10915),
        (0x10920, 0x10939),
        (0x10980, 0x109B7),
        (0x109BE, 0x109BF),
        (0x10A00, 0x10A03),
        (0x10A05, 0x10A06),
        (0x10A0C, 0x10A13),
        (0x10A15, 0x10A17),
        (0x10A19, 0x10A35),
        (0x10A60, 0x10A7C),
        (0x10A80, 0x10A9C),
        (0x10AC0, 0x10AC7),
        (0x10AC9, 0x10AE4),
        (0x10B00, 0x10B35),
        (0x10B40, 0x10B55),
        (0x10B60, 0x10B72),
        (0x10B80, 0x10B91),
        (0x10C00, 0x10C48),
        (0x10C80, 0x10CB2),
        (0x10CC0, 0x10CF2),
        (0x10D00, 0x10D27),
        (0x10E80, 0x10EA9),
        (0x10EAB, 0x10EAC),
        (0x10EB0, 0x10EB1),
        (0x10F00, 0x10F1C),
        (0x10F27, 0x10F27),
        (0x10F30, 0x10F45),
        (0x10F70, 0x10F81),
        (0x10FB0, 0x10FC4),
        (0x10FE0, 0x10FF6),
        (0x11000, 0x11045),
        (0x11071, 0x11075),
        (0x11082, 0x110B8),
        (0x110C2, 0x110C2),
        (0x110D0, 0x110E8),
        (0x11100, 0x11132),
        (0x11144, 0x11147),
        (0x11150, 0x11172),
        (0x11176, 0x11176),
        (0x11180, 0x111BF),
        (0x111C1, 0x111C4),
        (0x111CE, 0x111CF),
        (0x111DA, 0x111DA),
        (0x111DC, 0x111DC),
        (0x11200, 0x11211),
        (0x11213, 0x11234),
        (0x11237, 0x11237),
        (0x1123E, 0x1123E),
        (0x11280, 0x11286),
        (0x11288, 0x11288),
        (0x1128A, 0x1128D),
        (0x1128F, 0x1129D),
        (0x1129F, 0x112A8),
        (0x112B0, 0x112E8),
        (0x11300, 0x11303),
        (0x11305, 0x1130C),
        (0x1130F, 0x11310),
        (0x11313, 0x11328),
        (0x1132A, 0x11330),
        (0x11332, 0x11333),
        (0x11335, 0x11339),
        (0x1133D, 0x11344),
        (0x11347, 0x11348),
        (0x1134B, 0x1134C),
        (0x11350, 0x11350),
        (0x11357, 0x11357),
        (0x1135D, 0x11363),
        (0x11400, 0x11441),
        (0x11443, 0x11445),
        (0x11447, 0x1144A),
        (0x1145F, 0x11461),
        (0x11480, 0x114C1),
        (0x114C4, 0x114C5),
        (0x114C7, 0x114C7),
        (0x11580, 0x115B5),
        (0x115B8, 0x115BE),
        (0x115D8, 0x115DD),
        (0x11600, 0x1163E),
        (0x11640, 0x11640),
        (0x11644, 0x11644),
        (0x11680, 0x116B5),
        (0x116B8, 0x116B8),
        (0x11700, 0x1171A),
        (0x1171D, 0x1172A),
        (0x11740, 0x11746),
        (0x11800, 0x11838),
        (0x118A0, 0x118DF),
        (0x118FF, 0x11906),
        (0x11909, 0x11909),
        (0x1190C, 0x11913),
        (0x11915, 0x11916),
        (0x11918, 0x11935),
        (0x11937, 0x11938),
        (0x1193B, 0x1193C),
        (0x1193F, 0x11942),
        (0x119A0, 0x119A7),
        (0x119AA, 0x119D7),
        (0x119DA, 0x119DF),
        (0x119E1, 0x119E1),
        (0x119E3, 0x119E4),
        (0x11A00, 0x11A32),
        (0x11A35, 0x11A3E),
        (0x11A50, 0x11A97),
        (0x11A9D, 0x11A9D),
        (0x11AB0, 0x11AF8),
        (0x11C00, 0x11C08),
        (0x11C0A, 0x11C36),
        (0x11C38, 0x11C3E),
        (0x11C40, 0x11C40),
        (0x11C72, 0x11C8F),
        (0x11C92, 0x11CA7),
        (0x11CA9, 0x11CB6),
        (0x11D00, 0x11D06),
        (0x11D08, 0x11D09),
        (0x11D0B, 0x11D36),
        (0x11D3A, 0x11D3A),
        (0x11D3C, 0x11D3D),
        (0x11D3F, 0x11D41),
        (0x11D43, 0x11D43),
        (0x11D46, 0x11D47),
        (0x11D60, 0x11D65),
        (0x11D67, 0x11D68),
        (0x11D6A, 0x11D8E),
        (0x11D90, 0x11D91),
        (0x11D93, 0x11D96),
        (0x11D98, 0x11D98),
        (0x11EE0, 0x11EF6),
        (0x11FB0, 0x11FB0),
        (0x12000, 0x12399),
        (0x12400, 0x1246E),
        (0x12480, 0x12543),
        (0x12F90, 0x12FF0),
        (0x13000, 0x1342E),
        (0x14400, 0x14646),
        (0x16800, 0x16A38),
        (0x16A40, 0x16A5E),
        (0x16A70, 0x16ABE),
        (0x16AD0, 0x16AED),
        (0x16B00, 0x16B2F),
        (0x16B40, 0x16B43),
        (0x16B63, 0x16B77),
        (0x16B7D, 0x16B8F),
        (0x16E40, 0x16E7F),
        (0x16F00, 0x16F4A),
        (0x16F4F, 0x16F87),
        (0x16F8F, 0x16F9F),
        (0x16FE0, 0x16FE1),
        (0x16FE3, 0x16FE3),
        (0x16FF0, 0x16FF1),
        (0x17000, 0x187F7),
        (0x18800, 0x18CD5),
        (0x18D00, 0x18D08),
        (0x1AFF0, 0x1AFF3),
        (0x1AFF5, 0x1AFFB),
        (0x1AFFD, 0x1AFFE),
        (0x1B000, 0x1B122),
        (0x1B150, 0x1B152),
        (0x1B164, 0x1B167),
        (0x1B170, 0x1B2FB),
        (0x1BC00, 0x1BC6A),
        (0x1BC70, 0x1BC7C),
        (0x1BC80, 0x1BC88),
        (0x1BC90, 0x1BC99),
        (0x1BC9E, 0x1BC9E),
        (0x1D400, 0x1D454),
        (0x1D456, 0x1D49C),
        (0x1D49E, 0x1D49F),
        (0x1D4A2, 0x1D4A2),
        (0x1D4A5, 0x1D4A6),
        (0x1D4A9, 0x1D4AC),
        (0x1D4AE, 0x1D4B9),
        (0x1D4BB, 0x1D4BB),
        (0x1D4BD, 0x1D4C3),
        (0x1D4C5, 0x1D505),
        (0x1D507, 0x1D50A),
        (0x1D50D, 0x1D514),
        (0x1D516, 0x1D51C),
        (0x1D51E, 0x1D539),
        (0x1D53B, 0x1D53E),
        (0x1D540, 0x1D544),
        (0x1D546, 0x1D546),
        (0x1D54A, 0x1D550),
        (0x1D552, 0x1D6A5),
        (0x1D6A8, 0x1D6C0),
        (0x1D6C2, 0x1D6DA),
        (0x1D6DC, 0x1D6FA),
        (0x1D6FC, 0x1D714),
        (0x1D716, 0x1D734),
        (0x1D736, 0x1D74E),
        (0x1D750, 0x1D76E),
        (0x1D770, 0x1D788),
        (0x1D78A, 0x1D7A8),
        (0x1D7AA, 0x1D7C2),
        (0x1D7C4, 0x1D7CB),
        (0x1DF00, 0x1DF1E),
        (0x1E000, 0x1E006),
        (0x1E008, 0x1E018),
        (0x1E01B, 0x1E021),
        (0x1E023, 0x1E024),
        (0x1E026, 0x1E02A),
        (0x1E100, 0x1E12C),
        (0x1E137, 0x1E13D),
        (0x1E14E, 0x1E14E),
        (0x1E290, 0x1E2AD),
        (0x1E2C0, 0x1E2EB),
        (0x1E7E0, 0x1E7E6),
        (0x1E7E8, 0x1E7EB),
        (0x1E7ED, 0x1E7EE),
        (0x1E7F0, 0x1E7FE),
        (0x1E800, 0x1E8C4),
        (0x1E900, 0x1E943),
        (0x1E947, 0x1E947),
        (0x1E94B, 0x1E94B),
        (0x1EE00, 0x1EE03),
        (0x1EE05, 0x1EE1F),
        (0x1EE21, 0x1EE22),
        (0x1EE24, 0x1EE24),
        (0x1EE27, 0x1EE27),
        (0x1EE29, 0x1EE32),
        (0x1EE34, 0x1EE37),
        (0x1EE39, 0x1EE39),
        (0x1EE3B, 0x1EE3B),
        (0x1EE42, 0x1EE42),
        (0x1EE47, 0x1EE47),
        (0x1EE49, 0x1EE49),
        (0x1EE4B, 0x1EE4B),
        (0x1EE4D, 0x1EE4F),
        (0x1EE51, 0x1EE52),
        (0x1EE54, 0x1EE54),
        (0x1EE57, 0x1EE57),
        (0x1EE59, 0x1EE59),
        (0x1EE5B, 0x1EE5B),
        (0x1EE5D, 0x1EE5D),
        (0x1EE5F, 0x1EE5F),
        (0x1EE61, 0x1EE62),
        (0x1EE64, 0x1EE64),
        (0x1EE67, 0x1EE6A),
        (0x1EE6C, 0x1EE72),
        (0x1EE74, 0x1EE77),
        (0x1EE79, 0x1EE7C),
        (0x1EE7E, 0x1EE7E),
        (0x1EE80, 0x1EE89),
        (0x1EE8B, 0x1EE9B),
        (0x1EEA1, 0x1EEA3),
        (0x1EEA5, 0x1EEA9),
        (0x1EEAB, 0x1EEBB),
        (0x1F130, 0x1F149),
        (0x1F150, 0x1F169),
        (0x1F170, 0x1F189),
        (0x20000, 0x2A6DF),
        (0x2A700, 0x2B738),
        (0x2B740, 0x2B81D),
        (0x2B820, 0x2CEA1),
        (0x2CEB0, 0x2EBE0),
        (0x2F800, 0x2FA1D),
        (0x30000, 0x3134A),
    ];

    pub(crate) const GRAPHEME_EXTEND: &[(u32, u32)] = &[
        (0x0300, 0x036F),
        (0x0483, 0x0489),
        (0x0591, 0x05BD),
        (0x05BF, 0x05BF),
        (0x05C1, 0x05C2),
        (0x05C4, 0x05C5),
        (0x05C7, 0x05C7),
        (0x0610, 0x061A),
        (0x064B, 0x065F),
        (0x0670, 0x0670),
        (0x06D6, 0x06DC),
        (0x06DF, 0x06E4),
        (0x06E7, 0x06E8),
        (0x06EA, 0x06ED),
        (0x0711, 0x0711),
        (0x0730, 0x074A),
        (0x07A6, 0x07B0),
        (0x07EB, 0x07F3),
        (0x07FD, 0x07FD),
        (0x0816, 0x0819),
        (0x081B, 0x0823),
        (0x0825, 0x0827),
        (0x0829, 0x082D),
        (0x0859, 0x085B),
        (0x0898, 0x089F),
        (0x08CA, 0x08E1),
        (0x08E3, 0x0902),
        (0x093A, 0x093A),
        (0x093C, 0x093C),
        (0x0941, 0x0948),
        (0x094D, 0x094D),
        (0x0951, 0x0957),
        (0x0962, 0x0963),
        (0x0981, 0x0981),
        (0x09BC, 0x09BC),
        (0x09BE, 0x09BE),
        (0x09C1, 0x09C4),
        (0x09CD, 0x09CD),
        (0x09D7, 0x09D7),
        (0x09E2, 0x09E3),
        (0x09FE, 0x09FE),
        (0x0A01, 0x0A02),
        (0x0A3C, 0x0A3C),
        (0x0A41, 0x0A42),
        (0x0A47, 0x0A48),
        (0x0A4B, 0x0A4D),
        (0x0A51, 0x0A51),
        (0x0A70, 0x0A71),
        (0x0A75, 0x0A75),
        (0x0A81, 0x0A82),
        (0x0ABC, 0x0ABC),
        (0x0AC1, 0x0AC5),
        (0x0AC7, 0x0AC8),
        (0x0ACD, 0x0ACD),
        (0x0AE2, 0x0AE3),
        (0x0AFA, 0x0AFF),
        (0x0B01, 0x0B01),
        (0x0B3C, 0x0B3C),
        (0x0B3E, 0x0B3F),
        (0x0B41, 0x0B44),
        (0x0B4D, 0x0B4D),
        (0x0B55, 0x0B57),
        (0x0B62, 0x0B63),
        (0x0B82, 0x0B82),
        (0x0BBE, 0x0BBE),
        (0x0BC0, 0x0BC0),
        (0x0BCD, 0x0BCD),
        (0x0BD7, 0x0BD7),
        (0x0C00, 0x0C00),
        (0x0C04, 0x0C04),
        (0x0C3C, 0x0C3C),
        (0x0C3E, 0x0C40),
        (0x0C46, 0x0C48),
        (0x0C4A, 0x0C4D),
        (0x0C55, 0x0C56),
        (0x0C62, 0x0C63),
        (0x0C81, 0x0C81),
        (0x0CBC, 0x0CBC),
        (0x0CBF, 0x0CBF),
        (0x0CC2, 0x0CC2),
        (0x0CC6, 0x0CC6),
        (0x0CCC, 0x0CCD),
        (0x0CD5, 0x0CD6),
        (0x0CE2, 0x0CE3),
        (0x0D00, 0x0D01),
        (0x0D3B, 0x0D3C),
        (0x0D3E, 0x0D3E),
        (0x0D41, 0x0D44),
        (0x0D4D, 0x0D4D),
        (0x0D57, 0x0D57),
        (0x0D62, 0x0D63),
        (0x0D81, 0x0D81),
        (0x0DCA, 0x0DCA),
        (0x0DCF, 0x0DCF),
        (0x0DD2, 0x0DD4),
        (0x0DD6, 0x0DD6),
        (0x0DDF, 0x0DDF),
        (0x0E31, 0x0E31),
        (0x0E34, 0x0E3A),
        (0x0E47, 0x0E4E),
        (0x0EB1, 0x0EB1),
        (0x0EB4, 0x0EBC),
        (0x0EC8, 0x0ECD),
        (0x0F18, 0x0F19),
        (0x0F35, 0x0F35),
        (0x0F37, 0x0F37),
        (0x0F39, 0x0F39),
        (0x0F71, 0x0F7E),
        (0x0F80, 0x0F84),
        (0x0F86, 0x0F87),
        (0x0F8D, 0x0F97),
        (0x0F99, 0x0FBC),
        (0x0FC6, 0x0FC6),
        (0x102D, 0x1030),
        (0x1032, 0x1037),
        (0x1039, 0x103A),
        (0x103D, 0x103E),
        (0x1058, 0x1059),
        (0x105E, 0x1060),
        (0x1071, 0x1074),
        (0x1082, 0x1082),
        (0x1085, 0x1086),
        (0x108D, 0x108D),
        (0x109D, 0x109D),
        (0x135D, 0x135F),
        (0x1712, 0x1714),
        (0x1732, 0x1733),
        (0x1752, 0x1753),
        (0x1772, 0x1773),
        (0x17B4, 0x17B5),
        (0x17B7, 0x17BD),
        (0x17C6, 0x17C6),
        (0x17C9, 0x17D3),
        (0x17DD, 0x17DD),
        (0x180B, 0x180D),
        (0x180F, 0x180F),
        (0x1885, 0x1886),
        (0x18A9, 0x18A9),
        (0x1920, 0x1922),
        (0x1927, 0x1928),
        (0x1932, 0x1932),
        (0x1939, 0x193B),
        (0x1A17, 0x1A18),
        (0x1A1B, 0x1A1B),
        (0x1A56, 0x1A56),
        (0x1A58, 0x1A5E),
        (0x1A60, 0x1A60),
        (0x1A62, 0x1A62),
        (0x1A65, 0x1A6C),
        (0x1A73, 0x1A7C),
        (0x1A7F, 0x1A7F),
        (0x1AB0, 0x1ACE),
        (0x1B00, 0x1B03),
        (0x1B34, 0x1B3A),
        (0x1B3C, 0x1B3C),
        (0x1B42, 0x1B42),
        (0x1B6B, 0x1B73),
        (0x1B80, 0x1B81),
        (0x1BA2, 0x1BA5),
        (0x1BA8, 0x1BA9),
        (0x1BAB, 0x1BAD),
        (0x1BE6, 0x1BE6),
        (0x1BE8, 0x1BE9),
        (0x1BED, 0x1BED),
        (0x1BEF, 0x1BF1),
        (0x1C2C, 0x1C33),
        (0x1C36, 0x1C37),
        (0x1CD0, 0x1CD2),
        (0x1CD4, 0x1CE0),
        (0x1CE2, 0x1CE8),
        (0x1CED, 0x1CED),
        (0x1CF4, 0x1CF4),
        (0x1CF8, 0x1CF9),
        (0x1DC0, 0x1DFF),
        (0x200C, 0x200C),
        (0x20D0, 0x20F0),
        (0x2CEF, 0x2CF1),
        (0x2D7F, 0x2D7F),
        (0x2DE0, 0x2DFF),
        (0x302A, 0x302F),
        (0x3099, 0x309A),
        (0xA66F, 0xA672),
        (0xA674, 0xA67D),
        (0xA69E, 0xA69F),
        (0xA6F0, 0xA6F1),
        (0xA802, 0xA802),
        (0xA806, 0xA806),
        (0xA80B, 0xA80B),
        (0xA825, 0xA826),
        (0xA82C, 0xA82C),
        (0xA8C4, 0xA8C5),
        (0xA8E0, 0xA8F1),
        (0xA8FF, 0xA8FF),
        (0xA926, 0xA92D),
        (0xA947, 0xA951),
        (0xA980, 0xA982),
        (0xA9B3, 0xA9B3),
        (0xA9B6, 0xA9B9),
        (0xA9BC, 0xA9BD),
        (0xA9E5, 0xA9E5),
        (0xAA29, 0xAA2E),
        (0xAA31, 0xAA32),
        (0xAA35, 0xAA36),
        (0xAA43, 0xAA43),
        (0xAA4C, 0xAA4C),
        (0xAA7C, 0xAA7C),
        (0xAAB0, 0xAAB0),
        (0xAAB2, 0xAAB4),
        (0xAAB7, 0xAAB8),
        (0xAABE, 0xAABF),
        (0xAAC1, 0xAAC1),
        (0xAAEC, 0xAAED),
        (0xAAF6, 0xAAF6),
        (0xABE5, 0xABE5),
        (0xABE8, 0xABE8),
        (0xABED, 0xABED),
        (0xFB1E, 0xFB1E),
        (0xFE00, 0xFE0F),
        (0xFE20, 0xFE2F),
        (0xFF9E, 0xFF9F),
        (0x101FD, 0x101FD),
        (0x102E0, 0x102E0),
        (0x10376, 0x1037A),
        (0x10A01, 0x10A03),
        (0x10A05, 0x10A06),
        (0x10A0C, 0x10A0F),
        (0x10A38, 0x10A3A),
        (0x10A3F, 0x10A3F),
        (0x10AE5, 0x10AE6),
        (0x10D24, 0x10D27),
        (0x10EAB, 0x10EAC),
        (0x10F46, 0x10F50),
        (0x10F82, 0x10F85),
        (0x11001, 0x11001),
        (0x11038, 0x11046),
        (0x11070, 0x11070),
        (0x11073, 0x11074),
        (0x1107F, 0x11081),
        (0x110B3, 0x110B6),
        (0x110B9, 0x110BA),
        (0x110C2, 0x110C2),
        (0x11100, 0x11102),
        (0x11127, 0x1112B),
        (0x1112D, 0x11134),
        (0x11173, 0x11173),
        (0x11180, 0x11181),
        (0x111B6, 0x111BE),
        (0x111C9, 0x111CC),
        (0x111CF, 0x111CF),
        (0x1122F, 0x11231),
        (0x11234, 0x11234),
        (0x11236, 0x11237),
        (0x1123E, 0x1123E),
        (0x112DF, 0x112DF),
        (0x112E3, 0x112EA),
        (0x11300, 0x11301),
        (0x1133B, 0x1133C),
        (0x1133E, 0x1133E),
        (0x11340, 0x11340),
        (0x11357, 0x11357),
        (0x11366, 0x1136C),
        (0x11370, 0x11374),
        (0x11438, 0x1143F),
        (0x11442, 0x11444),
        (0x11446, 0x11446),
        (0x1145E, 0x1145E),
        (0x114B0, 0x114B0),
        (0x114B3, 0x114B8),
        (0x114BA, 0x114BA),
        (0x114BD, 0x114BD),
        (0x114BF, 0x114C0),
        (0x114C2, 0x114C3),
        (0x115AF, 0x115AF),
        (0x115B2, 0x115B5),
        (0x115BC, 0x115BD),
        (0x115BF, 0x115C0),
        (0x115DC, 0x115DD),
        (0x11633, 0x1163A),
        (0x1163D, 0x1163D),
        (0x1163F, 0x11640),
        (0x116AB, 0x116AB),
        (0x116AD, 0x116AD),
        (0x116B0, 0x116B5),
        (0x116B7, 0x116B7),
        (0x1171D, 0x1171F),
        (0x11722, 0x11725),
        (0x11727, 0x1172B),
        (0x1182F, 0x11837),
        (0x11839, 0x1183A),
        (0x11930, 0x11930),
        (0x1193B, 0x1193C),
        (0x1193E, 0x1193E),
        (0x11943, 0x11943),
        (0x119D4, 0x119D7),
        (0x119DA, 0x119DB),
        (0x119E0, 0x119E0),
        (0x11A01, 0x11A0A),
        (0x11A33, 0x11A38),
        (0x11A3B, 0x11A3E),
        (0x11A47, 0x11A47),
        (0x11A51, 0x11A56),
        (0x11A59, 0x11A5B),
        (0x11A8A, 0x11A96),
        (0x11A98, 0x11A99),
        (0x11C30, 0x11C36),
        (0x11C38, 0x11C3D),
        (0x11C3F, 0x11C3F),
        (0x11C92, 0x11CA7),
        (0x11CAA, 0x11CB0),
        (0x11CB2, 0x11CB3),
        (0x11CB5, 0x11CB6),
        (0x11D31, 0x11D36),
        (0x11D3A, 0x11D3A),
        (0x11D3C, 0x11D3D),
        (0x11D3F, 0x11D45),
        (0x11D47, 0x11D47),
        (0x11D90, 0x11D91),
        (0x11D95, 0x11D95),
        (0x11D97, 0x11D97),
        (0x11EF3, 0x11EF4),
        (0x16AF0, 0x16AF4),
        (0x16B30, 0x16B36),
        (0x16F4F, 0x16F4F),
        (0x16F8F, 0x16F92),
        (0x16FE4, 0x16FE4),
        (0x1BC9D, 0x1BC9E),
        (0x1CF00, 0x1CF2D),
        (0x1CF30, 0x1CF46),
        (0x1D165, 0x1D165),
        (0x1D167, 0x1D169),
        (0x1D16E, 0x1D172),
        (0x1D17B, 0x1D182),
        (0x1D185, 0x1D18B),
        (0x1D1AA, 0x1D1AD),
        (0x1D242, 0x1D244),
        (0x1DA00, 0x1DA36),
        (0x1DA3B, 0x1DA6C),
        (0x1DA75, 0x1DA75),
        (0x1DA84, 0x1DA84),
        (0x1DA9B, 0x1DA9F),
        (0x1DAA1, 0x1DAAF),
        (0x1E000, 0x1E006),
        (0x1E008, 0x1E018),
        (0x1E01B, 0x1E021),
        (0x1E023, 0x1E024),
        (0x1E026, 0x1E02A),
        (0x1E130, 0x1E136),
        (0x1E2AE, 0x1E2AE),
        (0x1E2EC, 0x1E2EF),
        (0x1E8D0, 0x1E8D6),
        (0x1E944, 0x1E94A),
        (0xE0020, 0xE007F),
        (0xE0100, 0xE01EF),
    ];

    pub(crate) const HEX_DIGIT: &[(u32, u32)] = &[
        (0x0030, 0x0039),
        (0x0041, 0x0046),
        (0x0061, 0x0066),
        (0xFF10, 0xFF19),
        (0xFF21, 0xFF26),
        (0xFF41, 0xFF46),
    ];

    pub(crate) const ID_CONTINUE: &[(u32, u32)] = &[
        (0x0030, 0x0039),
        (0x0041, 0x005A),
        (0x005F, 0x005F),
        (0x0061, 0x007A),
        (0x00AA, 0x00AA),
        (0x00B5, 0x00B5),
        (0x00B7, 0x00B7),
        (0x00BA, 0x00BA),
        (0x00C0, 0x00D6),
        (0x00D8, 0x00F6),
        (0x00F8, 0x02C1),
        (0x02C6, 0x02D1),
        (0x02E0, 0x02E4),
        (0x02EC, 0x02EC),
        (0x02EE, 0x02EE),
        (0x0300, 0x0374),
        (0x0376, 0x0377),
        (0x037A, 0x037D),
        (0x037F, 0x037F),
        (0x0386, 0x038A),
        (0x038C, 0x038C),
        (0x038E, 0x03A1),
        (0x03A3, 0x03F5),
        (0x03F7, 0x0481),
        (0x0483, 0x0487),
        (0x048A, 0x052F),
        (0x0531, 0x0556),
        (0x0559, 0x0559),
        (0x0560, 0x0588),
        (0x0591, 0x05BD),
        (0x05BF, 0x05BF),
        (0x05C1, 0x05C2),
        (0x05C4, 0x05C5),
        (0x05C7, 0x05C7),
        (0x05D0, 0x05EA),
        (0x05EF, 0x05F2),
        (0x0610, 0x061A),
        (0x0620, 0x0669),
        (0x066E, 0x06D3),
        (0x06D5, 0x06DC),
        (0x06DF, 0x06E8),
        (0x06EA, 0x06FC),
        (0x06FF, 0x06FF),
        (0x0710, 0x074A),
        (0x074D, 0x07B1),
        (0x07C0, 0x07F5),
        (0x07FA, 0x07FA),
        (0x07FD, 0x07FD),
        (0x0800, 0x082D),
        (0x0840, 0x085B),
        (0x0860, 0x086A),
        (0x0870, 0x0887),
        (0x0889, 0x088E),
        (0x0898, 0x08E1),
        (0x08E3, 0x0963),
        (0x0966, 0x096F),
        (0x0971, 0x0983),
        (0x0985, 0x098C),
        (0x098F, 0x0990),
        (0x0993, 0x09A8),
        (0x09AA, 0x09B0),
        (0x09B2, 0x09B2),
        (0x09B6, 0x09B9),
        (0x09BC, 0x09C4),
        (0x09C7, 0x09C8),
        (0x09CB, 0x09CE),
        (0x09D7, 0x09D7),
        (0x09DC, 0x09DD),
        (0x09DF, 0x09E3),
        (0x09E6, 0x09F1),
        (0x09FC, 0x09FC),
        (0x09FE, 0x09FE),
        (0x0A01, 0x0A03),
        (0x0A05, 0x0A0A),
        (0x0A0F, 0x0A10),
        (0x0A13, 0x0A28),
        (0x0A2A, 0x0A30),
        (0x0A32, 0x0A33),
        (0x0A35, 0x0A36),
        (0x0A38, 0x0A39),
        (0x0A3C, 0x0A3C),
        (0x0A3E, 0x0A42),
        (0x0A47, 0x0A48),
        (0x0A4B, 0x0A4D),
        (0x0A51, 0x0A51),
        (0x0A59, 0x0A5C),
        (0x0A5E, 0x0A5E),
        (0x0A66, 0x0A75),
        (0x0A81, 0x0A83),
        (0x0A85, 0x0A8D),
        (0x0A8F, 0x0A91),
        (0x0A93, 0x0AA8),
        (0x0AAA, 0x0AB0),
        (0x0AB2, 0x0AB3),
        (0x0AB5, 0x0AB9),
        (0x0ABC, 0x0AC5),
        (0x0AC7, 0x0AC9),
        (0x0ACB, 0x0ACD),
        (0x0AD0, 0x0AD0),
        (0x0AE0, 0x0AE3),
        (0x0AE6, 0x0AEF),
        (0x0AF9, 0x0AFF),
        (0x0B01, 0x0B03),
        (0x0B05, 0x0B0C),
        (0x0B0F, 0x0B10),
        (0x0B13, 0x0B28),
        (0x0B2A, 0x0B30),
        (0x0B32, 0x0B33),
        (0x0B35, 0x0B39),
        (0x0B3C, 0x0B44),
        (0x0B47, 0x0B48),
        (0x0B4B, 0x0B4D),
        (0x0B55, 0x0B57),
        (0x0B5C, 0x0B5D),
        (0x0B5F, 0x0B63),
        (0x0B66, 0x0B6F),
        (0x0B71, 0x0B71),
        (0x0B82, 0x0B83),
        (0x0B85, 0x0B8A),
        (0x0B8E, 0x0B90),
        (0x0B92, 0x0B95),
        (0x0B99, 0x0B9A),
        (0x0B9C, 0x0B9C),
        (0x0B9E, 0x0B9F),
        (0x0BA3, 0x0BA4),
        (0x0BA8, 0x0BAA),
        (0x0BAE, 0x0BB9),
        (0x0BBE, 0x0BC2),
        (0x0BC6, 0x0BC8),
        (0x0BCA, 0x0BCD),
        (0x0BD0, 0x0BD0),
        (0x0BD7, 0x0BD7),
        (0x0BE6, 0x0BEF),
        (0x0C00, 0x0C0C),
        (0x0C0E, 0x0C10),
        (0x0C12, 0x0C28),
        (0x0C2A, 0x0C39),
        (0x0C3C, 0x0C44),
        (0x0C46, 0x0C48),
        (0x0C4A, 0x0C4D),
        (0x0C55, 0x0C56),
        (0x0C58, 0x0C5A),
        (0x0C5D, 0x0C5D),
        (0x0C60, 0x0C63),
        (0x0C66, 0x0C6F),
        (0x0C80, 0x0C83),
        (0x0C85, 0x0C8C),
        (0x0C8E, 0x0C90),
        (0x0C92, 0x0CA8),
        (0x0CAA, 0x0CB3),
        (0x0CB5, 0x0CB9),
        (0x0CBC, 0x0CC4),
        (0x0CC6, 0x0CC8),
        (0x0CCA, 0x0CCD),
        (0x0CD5, 0x0CD6),
        (0x0CDD, 0x0CDE),
        (0x0CE0, 0x0CE3),
        (0x0CE6, 0x0CEF),
        (0x0CF1, 0x0CF2),
        (0x0D00, 0x0D0C),
        (0x0D0E, 0x0D10),
        (0x0D12, 0x0D44),
        (0x0D46, 0x0D48),
        (0x0D4A, 0x0D4E),
        (0x0D54, 0x0D57),
        (0x0D5F, 0x0D63),
        (0x0D66, 0x0D6F),
        (0x0D7A, 0x0D7F),
        (0x0D81, 0x0D83),
        (0x0D85, 0x0D96),
        (0x0D9A, 0x0DB1),
        (0x0DB3, 0x0DBB),
        (0x0DBD, 0x0DBD),
        (0x0DC0, 0x0DC6),
        (0x0DCA, 0x0DCA),
        (0x0DCF, 0x0DD4),
        (0x0DD6, 0x0DD6),
        (0x0DD8, 0x0DDF),
        (0x0DE6, 0x0DEF),
        (0x0DF2, 0x0DF3),
        (0x0E01, 0x0E3A),
        (0x0E40, 0x0E4E),
        (0x0E50, 0x0E59),
        (0x0E81, 0x0E82),
        (0x0E84, 0x0E84),
        (0x0E86, 0x0E8A),
        (0x0E8C, 0x0EA3),
        (0x0EA5, 0x0EA5),
        (0x0EA7, 0x0EBD),
        (0x0EC0, 0x0EC4),
        (0x0EC6, 0x0EC6),
        (0x0EC8, 0x0ECD),
        (0x0ED0, 0x0ED9),
        (0x0EDC, 0x0EDF),
        (0x0F00, 0x0F00),
        (0x0F18, 0x0F19),
        (0x0F20, 0x0F29),
        (0x0F35, 0x0F35),
        (0x0F37, 0x0F37),
        (0x0F39, 0x0F39),
        (0x0F3E, 0x0F47),
        (0x0F49, 0x0F6C),
        (0x0F71, 0x0F84),
        (0x0F86, 0x0F97),
        (0x0F99, 0x0FBC),
        (0x0FC6, 0x0FC6),
        (0x1000, 0x1049),
        (0x1050, 0x109D),
        (0x10A0, 0x10C5),
        (0x10C7, 0x10C7),
        (0x10CD, 0x10CD),
        (0x10D0, 0x10FA),
        (0x10FC, 0x1248),
        (0x124A, 0x124D),
        (0x1250, 0x1256),
        (0x1258, 0x1258),
        (0x125A, 0x125D),
        (0x1260, 0x1288),
        (0x128A, 0x128D),
        (0x1290, 0x12B0),
        (0x12B2, 0x12B5),
        (0x12B8, 0x12BE),
        (0x12C0, 0x12C0),
        (0x12C2, 0x12C5),
        (0x12C8, 0x12D6),
        (0x12D8, 0x1310),
        (0x1312, 0x1315),
        (0x1318, 0x135A),
        (0x135D, 0x135F),
        (0x1369, 0x1371),
        (0x1380, 0x138F),
        (0x13A0, 0x13F5),
        (0x13F8, 0x13FD),
        (0x1401, 0x166C),
        (0x166F, 0x167F),
        (0x1681, 0x169A),
        (0x16A0, 0x16EA),
        (0x16EE, 0x16F8),
        (0x1700, 0x1715),
        (0x171F, 0x1734),
        (0x1740, 0x1753),
        (0x1760, 0x176C),
        (0x176E, 0x1770),
        (0x1772, 0x1773),
        (0x1780, 0x17D3),
        (0x17D7, 0x17D7),
        (0x17DC, 0x17DD),
        (0x17E0, 0x17E9),
        (0x180B, 0x180D),
        (0x180F, 0x1819),
        (0x1820, 0x1878),
        (0x1880, 0x18AA),
        (0x18B0, 0x18F5),
        (0x1900, 0x191E),
        (0x1920, 0x192B),
        (0x1930, 0x193B),
        (0x1946, 0x196D),
        (0x1970, 0x1974),
        (0x1980, 0x19AB),
        (0x19B0, 0x19C9),
        (0x19D0, 0x19DA),
        (0x1A00, 0x1A1B),
        (0x1A20, 0x1A5E),
        (0x1A60, 0x1A7C),
        (0x1A7F, 0x1A89),
        (0x1A90, 0x1A99),
        (0x1AA7, 0x1AA7),
        (0x1AB0, 0x1ABD),
        (0x1ABF, 0x1ACE),
        (0x1B00, 0x1B4C),
        (0x1B50, 0x1B59),
        (0x1B6B, 0x1B73),
        (0x1B80, 0x1BF3),
        (0x1C00, 0x1C37),
        (0x1C40, 0x1C49),
        (0x1C4D, 0x1C7D),
        (0x1C80, 0x1C88),
        (0x1C90, 0x1CBA),
        (0x1CBD, 0x1CBF),
        (0x1CD0, 0x1CD2),
        (0x1CD4, 0x1CFA),
        (0x1D00, 0x1F15),
        (0x1F18, 0x1F1D),
        (0x1F20, 0x1F45),
        (0x1F48, 0x1F4D),
        (0x1F50, 0x1F57),
        (0x1F59, 0x1F59),
        (0x1F5B, 0x1F5B),
        (0x1F5D, 0x1F5D),
        (0x1F5F, 0x1F7D),
        (0x1F80, 0x1FB4),
        (0x1FB6, 0x1FBC),
        (0x1FBE, 0x1FBE),
        (0x1FC2, 0x1FC4),
        (0x1FC6, 0x1FCC),
        (0x1FD0, 0x1FD3),
        (0x1FD6, 0x1FDB),
        (0x1FE0, 0x1FEC),
        (0x1FF2, 0x1FF4),
        (0x1FF6, 0x1FFC),
        (0x203F, 0x2040),
        (0x2054, 0x2054),
        (0x2071, 0x2071),
        (0x207F, 0x207F),
        (0x2090, 0x209C),
        (0x20D0, 0x20DC),
        (0x20E1, 0x20E1),
        (0x20E5, 0x20F0),
        (0x2102, 0x2102),
        (0x2107, 0x2107),
        (0x210A, 0x2113),
        (0x2115, 0x2115),
        (0x2118, 0x211D),
        (0x2124, 0x2124),
        (0x2126, 0x2126),
        (0x2128, 0x2128),
        (0x212A, 0x2139),
        (0x213C, 0x213F),
        (0x2145, 0x2149),
        (0x214E, 0x214E),
        (0x2160, 0x2188),
        (0x2C00, 0x2CE4),
        (0x2CEB, 0x2CF3),
        (0x2D00, 0x2D25),
        (0x2D27, 0x2D27),
        (0x2D2D, 0x2D2D),
        (0x2D30, 0x2D67),
        (0x2D6F, 0x2D6F),
        (0x2D7F, 0x2D96),
        (0x2DA0, 0x2DA6),
        (0x2DA8, 0x2DAE),
        (0x2DB0, 0x2DB6),
        (0x2DB8, 0x2DBE),
        (0x2DC0, 0x2DC6),
        (0x2DC8, 0x2DCE),
        (0x2DD0, 0x2DD6),
        (0x2DD8, 0x2DDE),
        (0x2DE0, 0x2DFF),
        (0x3005, 0x3007),
        (0x3021, 0x302F),
        (0x3031, 0x3035),
        (0x3038, 0x303C),
        (0x3041, 0x3096),
        (0x3099, 0x309F),
        (0x30A1, 0x30FA),
        (0x30FC, 0x30FF),
        (0x3105, 0x312F),
        (0x3131, 0x318E),
        (0x31A0, 0x31BF),
        (0x31F0, 0x31FF),
        (0x3400, 0x4DBF),
        (0x4E00, 0xA48C),
        (0xA4D0, 0xA4FD),
        (0xA500, 0xA60C),
        (0xA610, 0xA62B),
        (0xA640, 0xA66F),
        (0xA674, 0xA67D),
        (0xA67F, 0xA6F1),
        (0xA717, 0xA71F),
        (0xA722, 0xA788),
        (0xA78B, 0xA7CA),
        (0xA7D0, 0xA7D1),
        (0xA7D3, 0xA7D3),
        (0xA7D5, 0xA7D9),
        (0xA7F2, 0xA827),
        (0xA82C, 0xA82C),
        (0xA840, 0xA873),
        (0xA880, 0xA8C5),
        (0xA8D0, 0xA8D9),
        (0xA8E0, 0xA8F7),
        (0xA8FB, 0xA8FB),
        (0xA8FD, 0xA92D),
        (0xA930, 0xA953),
        (0xA960, 0xA97C),
        (0xA980, 0xA9C0),
        (0xA9CF, 0xA9D9),
        (0xA9E0, 0xA9FE),
        (0xAA00, 0xAA36),
        (0xAA40, 0xAA4D),
        (0xAA50, 0xAA59),
        (0xAA60, 0xAA76),
        (0xAA7A, 0xAAC2),
        (0xAADB, 0xAADD),
        (0xAAE0, 0xAAEF),
        (0xAAF2, 0xAAF6),
        (0xAB01, 0xAB06),
        (0xAB09, 0xAB0E),
        (0xAB11, 0xAB16),
        (0xAB20, 0xAB26),
        (0xAB28, 0xAB2E),
        (0xAB30, 0xAB5A),
        (0xAB5C, 0xAB69),
        (0xAB70, 0xABEA),
        (0xABEC, 0xABED),
        (0xABF0, 0xABF9),
        (0xAC00, 0xD7A3),
        (0xD7B0, 0xD7C6),
        (0xD7CB, 0xD7FB),
        (0xF900, 0xFA6D),
        (0xFA70, 0xFAD9),
        (0xFB00, 0xFB06),
        (0xFB13, 0xFB17),
        (0xFB1D, 0xFB28),
        (0xFB2A, 0xFB36),
        (0xFB38, 0xFB3C),
        (0xFB3E, 0xFB3E),
        (0xFB40, 0xFB41),
        (0xFB43, 0xFB44),
        (0xFB46, 0xFBB1),
        (0xFBD3, 0xFD3D),
        (0xFD50, 0xFD8F),
        (0xFD92, 0xFDC7),
        (0xFDF0, 0xFDFB),
        (0xFE00, 0xFE0F),
        (0xFE20, 0xFE2F),
        (0xFE33, 0xFE34),
        (0xFE4D, 0xFE4F),
        (0xFE70, 0xFE74),
        (0xFE76, 0xFEFC),
        (0xFF10, 0xFF19),
        (0xFF21, 0xFF3A),
        (0xFF3F, 0xFF3F),
        (0xFF41, 0xFF5A),
        (0xFF66, 0xFFBE),
        (0xFFC2, 0xFFC7),
        (0xFFCA, 0xFFCF),
        (0xFFD2, 0xFFD7),
        (0xFFDA, 0xFFDC),
        (0x10000, 0x1000B),
        (0x1000D, 0x10026),
        (0x10028, 0x1003A),
        (0x1003C, 0x1003D),
        (0x1003F, 0x1004D),
        (0x10050, 0x1005D),
        (0x10080, 0x100FA),
        (0x10140, 0x10174),
        (0x101FD, 0x101FD),
        (0x10280, 0x1029C),
        (0x102A0, 0x102D0),
        (0x102E0, 0x102E0),
        (0x10300, 0x1031F),
        (0x1032D, 0x1034A),
        (0x10350, 0x1037A),
        (0x10380, 0x1039D),
        (0x103A0, 0x103C3),
        (0x103C8, 0x103CF),
        (0x103D1, 0x103D5),
        (0x10400, 0x1049D),
        (0x104A0, 0x104A9),
        (0x104B0, 0x104D3),
        (0x104D8, 0x104FB),
        (0x10500, 0x10527),
        (0x10530, 0x10563),
        (0x10570, 0x1057A),
        (0x1057C, 0x1058A),
        (0x1058C, 0x10592),
        (0x10594, 0x10595),
        (0x10597, 0x105A1),
        (0x105A3, 0x105B1),
        (0x105B3, 0x105B9),
        (0x105BB, 0x105BC),
        (0x10600, 0x10736),
        (0x10740, 0x10755),
        (0x10760, 0x10767),
        (0x10780, 0x10785),
        (0x10787, 0x107B0),
        (0x107B2, 0x107BA),
        (0x10800, 0x10805),
        (0x10808, 0x10808),
        (0x1080A, 0x10835),
        (0x10837, 0x10838),
        (0x1083C, 0x1083C),
        (0x1083F, 0x10855),
        (0x10860, 0x10876),
        (0x10880, 0x1089E),
        (0x108E0, 0x108F2),
        (0x108F4, 0x108F5),
        (0x10900, 0x10915),
        (0x10920, 0x10939),
        (0x10980, 0x109B7),
        (0x109BE, 0x109BF),
        (0x10A00, 0x10A03),
        (0x10A05, 0x10A06),
        (0x10A0C, 0x10A13),
        (0x10A15, 0x10A17),
        (0x10A19, 0x10A35),
        (0x10A38, 0x10A3A),
        (0x10A3F, 0x10A3F),
        (0x10A60, 0x10A7C),
        (0x10A80, 0x10A9C),
        (0x10AC0, 0x10AC7),
        (0x10AC9, 0x10AE6),
        (0x10B00, 0x10B35),
        (0x10B40, 0x10B55),
        (0x10B60, 0x10B72),
        (0x10B80, 0x10B91),
        (0x10C00, 0x10C48),
        (0x10C80, 0x10CB2),
        (0x10CC0, 0x10CF2),
        (0x10D00, 0x10D27),
        (0x10D30, 0x10D39),
        (0x10E80, 0x10EA9),
        (0x10EAB, 0x10EAC),
        (0x10EB0, 0x10EB1),
        (0x10F00, 0x10F1C),
        (0x10F27, 0x10F27),
        (0x10F30, 0x10F50),
        (0x10F70, 0x10F85),
        (0x10FB0, 0x10FC4),
        (0x10FE0, 0x10FF6),
        (0x11000, 0x11046),
        (0x11066, 0x11075),
        (0x1107F, 0x110BA),
        (0x110C2, 0x110C2),
        (0x110D0, 0x110E8),
        (0x110F0, 0x110F9),
        (0x11100, 0x11134),
        (0x11136, 0x1113F),
        (0x11144, 0x11147),
        (0x11150, 0x11173),
        (0x11176, 0x11176),
        (0x11180, 0x111C4),
        (0x111C9, 0x111CC),
        (0x111CE, 0x111DA),
        (0x111DC, 0x111DC),
        (0x11200, 0x11211),
        (0x11213, 0x11237),
        (0x1123E, 0x1123E),
        (0x11280, 0x11286),
        (0x11288, 0x11288),
        (0x1128A, 0x1128D),
        (0x1128F, 0x1129D),
        (0x1129F, 0x112A8),
        (0x112B0, 0x112EA),
        (0x112F0, 0x112F9),
        (0x11300, 0x11303),
        (0x11305, 0x1130C),
        (0x1130F, 0x11310),
        (0x11313, 0x11328),
        (0x1132A, 0x11330),
        (0x11332, 0x11333),
        (0x11335, 0x11339),
        (0x1133B, 0x11344),
        (0x11347, 0x11348),
        (0x1134B, 0x1134D),
        (0x11350, 0x11350),
        (0x11357, 0x11357),
        (0x1135D, 0x11363),
        (0x11366, 0x1136C),
        (0x11370, 0x11374),
        (0x11400, 0x1144A),
        (0x11450, 0x11459),
        (0x1145E, 0x11461),
        (0x11480, 0x114C5),
        (0x114C7, 0x114C7),
        (0x114D0, 0x114D9),
        (0x11580, 0x115B5),
        (0x115B8, 0x115C0),
        (0x115D8, 0x115DD),
        (0x11600, 0x11640),
        (0x11644, 0x11644),
        (0x11650, 0x11659),
        (0x11680, 0x116B8),
        (0x116C0, 0x116C9),
        (0x11700, 0x1171A),
        (0x1171D, 0x1172B),
        (0x11730, 0x11739),
        (0x11740, 0x11746),
        (0x11800, 0x1183A),
        (0x118A0, 0x118E9),
        (0x118FF, 0x11906),
        (0x11909, 0x11909),
        (0x1190C, 0x11913),
        (0x11915, 0x11916),
        (0x11918, 0x11935),
        (0x11937, 0x11938),
        (0x1193B, 0x11943),
        (0x11950, 0x11959),
        (0x119A0, 0x119A7),
        (0x119AA, 0x119D7),
        (0x119DA, 0x119E1),
        (0x119E3, 0x119E4),
        (0x11A00, 0x11A3E),
        (0x11A47, 0x11A47),
        (0x11A50, 0x11A99),
        (0x11A9D, 0x11A9D),
        (0x11AB0, 0x11AF8),
        (0x11C00, 0x11C08),
        (0x11C0A, 0x11C36),
        (0x11C38, 0x11C40),
        (0x11C50, 0x11C59),
        (0x11C72, 0x11C8F),
        (0x11C92, 0x11CA7),
        (0x11CA9, 0x11CB6),
        (0x11D00, 0x11D06),
        (0x11D08, 0x11D09),
        (0x11D0B, 0x11D36),
        (0x11D3A, 0x11D3A),
        (0x11D3C, 0x11D3D),
        (0x11D3F, 0x11D47),
        (0x11D50, 0x11D59),
        (0x11D60, 0x11D65),
        (0x11D67, 0x11D68),
        (0x11D6A, 0x11D8E),
        (0x11D90, 0x11D91),
        (0x11D93, 0x11D98),
        (0x11DA0, 0x11DA9),
        (0x11EE0, 0x11EF6),
        (0x11FB0, 0x11FB0),
        (0x12000, 0x12399),
        (0x12400, 0x1246E),
        (0x12480, 0x12543),
        (0x12F90, 0x12FF0),
        (0x13000, 0x1342E),
        (0x14400, 0x14646),
        (0x16800, 0x16A38),
        (0x16A40, 0x16A5E),
        (0x16A60, 0x16A69),
        (0x16A70, 0x16ABE),
        (0x16AC0, 0x16AC9),
        (0x16AD0, 0x16AED),
        (0x16AF0, 0x16AF4),
        (0x16B00, 0x16B36),
        (0x16B40, 0x16B43),
        (0x16B50, 0x16B59),
        (0x16B63, 0x16B77),
        (0x16B7D, 0x16B8F),
        (0x16E40, 0x16E7F),
        (0x16F00, 0x16F4A),
        (0x16F4F, 0x16F87),
        (0x16F8F, 0x16F9F),
        (0x16FE0, 0x16FE1),
        (0x16FE3, 0x16FE4),
        (0x16FF0, 0x16FF1),
        (0x17000, 0x187F7),
        (0x18800, 0x18CD5),
        (0x18D00, 0x18D08),
        (0x1AFF0, 0x1AFF3),
        (0x1AFF5, 0x1AFFB),
        (0x1AFFD, 0x1AFFE),
        (0x1B000, 0x1B122),
        (0x1B150, 0x1B152),
        (0x1B164, 0x1B167),
        (0x1B170, 0x1B2FB),
        (0x1BC00, 0x1BC6A),
        (0x1BC70, 0x1BC7C),
        (0x1BC80, 0x1BC88),
        (0x1BC90, 0x1BC99),
        (0x1BC9D, 0x1BC9E),
        (0x1CF00, 0x1CF2D),
        (0x1CF30, 0x1CF46),
        (0x1D165, 0x1D169),
        (0x1D16D, 0x1D172),
        (0x1D17B, 0x1D182),
        (0x1D185, 0x1D18B),
        (0x1D1AA, 0x1D1AD),
        (0x1D242, 0x1D244),
        (0x1D400, 0x1D454),
        (0x1D456, 0x1D49C),
        (0x1D49E, 0x1D49F),
        (0x1D4A2, 0x1D4A2),
        (0x1D4A5, 0x1D4A6),
        (0x1D4A9, 0x1D4AC),
        (0x1D4AE, 0x1D4B9),
        (0x1D4BB, 0x1D4BB),
        (0x1D4BD, 0x1D4C3),
        (0x1D4C5, 0x1D505),
        (0x1D507, 0x1D50A),
        (0x1D50D, 0x1D514),
        (0x1D516, 0x1D51C),
        (0x1D51E, 0x1D539),
        (0x1D53B, 0x1D53E),
        (0x1D540, 0x1D544),
        (0x1D546, 0x1D546),
        (0x1D54A, 0x1D550),
        (0x1D552, 0x1D6A5),
        (0x1D6A8, 0x1D6C0),
        (0x1D6C2, 0x1D6DA),
        (0x1D6DC, 0x1D6FA),
        (0x1D6FC, 0x1D714),
        (0x1D716, 0x1D734),
        (0x1D736, 0x1D74E),
        (0x1D750, 0x1D76E),
        (0x1D770, 0x1D788),
        (0x1D78A, 0x1D7A8),
        (0x1D7AA, 0x1D7C2),
        (0x1D7C4, 0x1D7CB),
        (0x1D7CE, 0x1D7FF),
        (0x1DA00, 0x1DA36),
        (0x1DA3B, 0x1DA6C),
        (0x1DA75, 0x1DA75),
        (0x1DA84, 0x1DA84),
        (0x1DA9B, 0x1DA9F),
        (0x1DAA1, 0x1DAAF),
        (0x1DF00, 0x1DF1E),
        (0x1E000, 0x1E006),
        (0x1E008, 0x1E018),
        (0x1E01B, 0x1E021),
        (0x1E023, 0x1E024),
        (0x1E026, 0x1E02A),
        (0x1E100, 0x1E12C),
        (0x1E130, 0x1E13D),
        (0x1E140, 0x1E149),
        (0x1E14E, 0x1E14E),
        (0x1E290, 0x1E2AE),
        (0x1E2C0, 0x1E2F9),
        (0x1E7E0, 0x1E7E6),
        (0x1E7E8, 0x1E7EB),
        (0x1E7ED, 0x1E7EE),
        (0x1E7F0, 0x1E7FE),
        (0x1E800, 0x1E8C4),
        (0x1E8D0, 0x1E8D6),
        (0x1E900, 0x1E94B),
        (0x1E950, 0x1E959),
        (0x1EE00, 0x1EE03),
        (0x1EE05, 0x1EE1F),
        (0x1EE21, 0x1EE22),
        (0x1EE24, 0x1EE24),
        (0x1EE27, 0x1EE27),
        (0x1EE29, 0x1EE32),
        (0x1EE34, 0x1EE37),
        (0x1EE39, 0x1EE39),
        (0x1EE3B, 0x1EE3B),
        (0x1EE42, 0x1EE42),
        (0x1EE47, 0x1EE47),
        (0x1EE49, 0x1EE49),
        (0x1EE4B, 0x1EE4B),
        (0x1EE4D, 0x1EE4F),
        (0x1EE51, 0x1EE52),
        (0x1EE54, 0x1EE54),
        (0x1EE57, 0x1EE57),
        (0x1EE59, 0x1EE59),
        (0x1EE5B, 0x1EE5B),
        (0x1EE5D, 0x1EE5D),
        (0x1EE5F, 0x1EE5F),
        (0x1EE61, 0x1EE62),
        (0x1EE64, 0x1EE64),
        (0x1EE67, 0x1EE6A),
        (0x1EE6C, 0x1EE72),
        (0x1EE74, 0x1EE77),
        (0x1EE79, 0x1EE7C),
        (0x1EE7E, 0x1EE7E),
        (0x1EE80, 0x1EE89),
        (0x1EE8B, 0x1EE9B),
        (0x1EEA1, 0x1EEA3),
        (0x1EEA5, 0x1EEA9),
        (0x1EEAB, 0x1EEBB),
        (0x1FBF0, 0x1FBF9),
        (0x20000, 0x2A6DF),
        (0x2A700, 0x2B738),
        (0x2B740, 0x2B81D),
        (0x2B820, 0x2CEA1),
        (0x2CEB0, 0x2EBE0),
        (0x2F800, 0x2FA1D),
        (0x30000, 0x3134A),
        (0xE0100, 0xE01EF),
    ];

    pub(crate) const ID_START: &[(u32, u32)] = &[
        (0x0041, 0x005A),
        (0x0061, 0x007A),
        (0x00AA, 0x00AA),
        (0x00B5, 0x00B5),
        (0x00BA, 0x00BA),
        (0x00C0, 0x00D6),
        (0x00D8, 0x00F6),
        (0x00F8, 0x02C1),
        (0x02C6, 0x02D1),
        (0x02E0, 0x02E4),
        (0x02EC, 0x02EC),
        (0x02EE, 0x02EE),
        (0x0370, 0x0374),
        (0x0376, 0x0377),
        (0x037A, 0x037D),
        (0x037F, 0x037F),
        (0x0386, 0x0386),
        (0x0388, 0x038A),
        (0x038C, 0x038C),
        (0x038E, 0x03A1),
        (0x03A3, 0x03F5),
        (0x03F7, 0x0481),
        (0x048A, 0x052F),
        (0x0531, 0x0556),
        (0x0559, 0x0559),
        (0x0560, 0x0588),
        (0x05D0, 0x05EA),
        (0x05EF, 0x05F2),
        (0x0620, 0x064A),
        (0x066E, 0x066F),
        (0x0671, 0x06D3),
        (0x06D5, 0x06D5),
        (0x06E5, 0x06E6),
        (0x06EE, 0x06EF),
        (0x06FA, 0x06FC),
        (0x06FF, 0x06FF),
        (0x0710, 0x0710),
        (0x0712, 0x072F),
        (0x074D, 0x07A5),
        (0x07B1, 0x07B1),
        (0x07CA, 0x07EA),
        (0x07F4, 0x07F5),
        (0x07FA, 0x07FA),
        (0x0800, 0x0815),
        (0x081A, 0x081A),
        (0x0824, 0x0824),
        (0x0828, 0x0828),
        (0x0840, 0x0858),
        (0x0860, 0x086A),
        (0x0870, 0x0887),
        (0x0889, 0x088E),
        (0x08A0, 0x08C9),
        (0x0904, 0x0939),
        (0x093D, 0x093D),
        (0x0950, 0x0950),
        (0x0958, 0x0961),
        (0x0971, 0x0980),
        (0x0985, 0x098C),
        (0x098F, 0x0990),
        (0x0993, 0x09A8),
        (0x09AA, 0x09B0),
        (0x09B2, 0x09B2),
        (0x09B6, 0x09B9),
        (0x09BD, 0x09BD),
        (0x09CE, 0x09CE),
        (0x09DC, 0x09DD),
        (0x09DF, 0x09E1),
        (0x09F0, 0x09F1),
        (0x09FC, 0x09FC),
        (0x0A05, 0x0A0A),
        (0x0A0F, 0x0A10),
        (0x0A13, 0x0A28),
        (0x0A2A, 0x0A30),
        (0x0A32, 0x0A33),
        (0x0A35, 0x0A36),
        (0x0A38, 0x0A39),
        (0x0A59, 0x0A5C),
        (0x0A5E, 0x0A5E),
        (0x0A72, 0x0A74),
        (0x0A85, 0x0A8D),
        (0x0A8F, 0x0A91),
        (0x0A93, 0x0AA8),
        (0x0AAA, 0x0AB0),
        (0x0AB2, 0x0AB3),
        (0x0AB5, 0x0AB9),
        (0x0ABD, 0x0ABD),
        (0x0AD0, 0x0AD0),
        (0x0AE0, 0x0AE1),
        (0x0AF9, 0x0AF9),
        (0x0B05, 0x0B0C),
        (0x0B0F, 0x0B10),
        (0x0B13, 0x0B28),
        (0x0B2A, 0x0B30),
        (0x0B32, 0x0B33),
        (0x0B35, 0x0B39),
        (0x0B3D, 0x0B3D),
        (0x0B5C, 0x0B5D),
        (0x0B5F, 0x0B61),
        (0x0B71, 0x0B71),
        (0x0B83, 0x0B83),
        (0x0B85, 0x0B8A),
        (0x0B8E, 0x0B90),
        (0x0B92, 0x0B95),
        (0x0B99, 0x0B9A),
        (0x0B9C, 0x0B9C),
        (0x0B9E, 0x0B9F),
        (0x0BA3, 0x0BA4),
        (0x0BA8, 0x0BAA),
        (0x0BAE, 0x0BB9),
        (0x0BD0, 0x0BD0),
        (0x0C05, 0x0C0C),
        (0x0C0E, 0x0C10),
        (0x0C12, 0x0C28),
        (0x0C2A, 0x0C39),
        (0x0C3D, 0x0C3D),
        (0x0C58, 0x0C5A),
        (0x0C5D, 0x0C5D),
        (0x0C60, 0x0C61),
        (0x0C80, 0x0C80),
        (0x0C85, 0x0C8C),
        (0x0C8E, 0x0C90),
        (0x0C92, 0x0CA8),
        (0x0CAA, 0x0CB3),
        (0x0CB5, 0x0CB9),
        (0x0CBD, 0x0CBD),
        (0x0CDD, 0x0CDE),
        (0x0CE0, 0x0CE1),
        (0x0CF1, 0x0CF2),
        (0x0D04, 0x0D0C),
        (0x0D0E, 0x0D10),
        (0x0D12, 0x0D3A),
        (0x0D3D, 0x0D3D),
        (0x0D4E, 0x0D4E),
        (0x0D54, 0x0D56),
        (0x0D5F, 0x0D61),
        (0x0D7A, 0x0D7F),
        (0x0D85, 0x0D96),
        (0x0D9A, 0x0DB1),
        (0x0DB3, 0x0DBB),
        (0x0DBD, 0x0DBD),
        (0x0DC0, 0x0DC6),
        (0x0E01, 0x0E30),
        (0x0E32, 0x0E33),
        (0x0E40, 0x0E46),
        (0x0E81, 0x0E82),
        (0x0E84, 0x0E84),
        (0x0E86, 0x0E8A),
        (0x0E8C, 0x0EA3),
        (0x0EA5, 0x0EA5),
        (0x0EA7, 0x0EB0),
        (0x0EB2, 0x0EB3),
        (0x0EBD, 0x0EBD),
        (0x0EC0, 0x0EC4),
        (0x0EC6, 0x0EC6),
        (0x0EDC, 0x0EDF),
        (0x0F00, 0x0F00),
        (0x0F40, 0x0F47),
        (0x0F49, 0x0F6C),
        (0x0F88, 0x0F8C),
        (0x1000, 0x102A),
        (0x103F, 0x103F),
        (0x1050, 0x1055),
        (0x105A, 0x105D),
        (0x1061, 0x1061),
        (0x1065, 0x1066),
        (0x106E, 0x1070),
        (0x1075, 0x1081),
        (0x108E, 0x108E),
        (0x10A0, 0x10C5),
        (0x10C7, 0x10C7),
        (0x10CD, 0x10CD),
        (0x10D0, 0x10FA),
        (0x10FC, 0x1248),
        (0x124A, 0x124D),
        (0x1250, 0x1256),
        (0x1258, 0x1258),
        (0x125A, 0x125D),
        (0x1260, 0x1288),
        (0x128A, 0x128D),
        (0x1290, 0x12B0),
        (0x12B2, 0x12B5),
        (0x12B8, 0x12BE),
        (0x12C0, 0x12C0),
        (0x12C2, 0x12C5),
        (0x12C8, 0x12D6),
        (0x12D8, 0x1310),
        (0x1312, 0x1315),
        (0x1318, 0x135A),
        (0x1380, 0x138F),
        (0x13A0, 0x13F5),
        (0x13F8, 0x13FD),
        (0x1401, 0x166C),
        (0x166F, 0x167F),
        (0x1681, 0x169A),
        (0x16A0, 0x16EA),
        (0x16EE, 0x16F8),
        (0x1700, 0x1711),
        (0x171F, 0x1731),
        (0x1740, 0x1751),
        (0x1760, 0x176C),
        (0x176E, 0x1770),
        (0x1780, 0x17B3),
        (0x17D7, 0x17D7),
        (0x17DC, 0x17DC),
        (0x1820, 0x1878),
        (0x1880, 0x18A8),
        (0x18AA, 0x18AA),
        (0x18B0, 0x18F5),
        (0x1900, 0x191E),
        (0x1950, 0x196D),
        (0x1970, 0x1974),
        (0x1980, 0x19AB),
        (0x19B0, 0x19C9),
        (0x1A00, 0x1A16),
        (0x1A20, 0x1A54),
        (0x1AA7, 0x1AA7),
        (0x1B05, 0x1B33),
        (0x1B45, 0x1B4C),
        (0x1B83, 0x1BA0),
        (0x1BAE, 0x1BAF),
        (0x1BBA, 0x1BE5),
        (0x1C00, 0x1C23),
        (0x1C4D, 0x1C4F),
        (0x1C5A, 0x1C7D),
        (0x1C80, 0x1C88),
        (0x1C90, 0x1CBA),
        (0x1CBD, 0x1CBF),
        (0x1CE9, 0x1CEC),
        (0x1CEE, 0x1CF3),
        (0x1CF5, 0x1CF6),
        (0x1CFA, 0x1CFA),
        (0x1D00, 0x1DBF),
        (0x1E00, 0x1F15),
        (0x1F18, 0x1F1D),
        (0x1F20, 0x1F45),
        (0x1F48, 0x1F4D),
        (0x1F50, 0x1F57),
        (0x1F59, 0x1F59),
        (0x1F5B, 0x1F5B),
        (0x1F5D, 0x1F5D),
        (0x1F5F, 0x1F7D),
        (0x1F80, 0x1FB4),
        (0x1FB6, 0x1FBC),
        (0x1FBE, 0x1FBE),
        (0x1FC2, 0x1FC4),
        (0x1FC6, 0x1FCC),
        (0x1FD0, 0x1FD3),
        (0x1FD6, 0x1FDB),
        (0x1FE0, 0x1FEC),
        (0x1FF2, 0x1FF4),
        (0x1FF6, 0x1FFC),
        (0x2071, 0x2071),
        (0x207F, 0x207F),
        (0x2090, 0x209C),
        (0x2102, 0x2102),
        (0x2107, 0x2107),
        (0x210A, 0x2113),
        (0x2115, 0x2115),
        (0x2118, 0x211D),
        (0x2124, 0x2124),
        (0x2126, 0x2126),
        (0x2128, 0x2128),
        (0x212A, 0x2139),
        (0x213C, 0x213F),
        (0x2145, 0x2149),
        (0x214E, 0x214E),
        (0x2160, 0x2188),
        (0x2C00, 0x2CE4),
        (0x2CEB, 0x2CEE),
        (0x2CF2, 0x2CF3),
        (0x2D00, 0x2D25),
        (0x2D27, 0x2D27),
        (0x2D2D, 0x2D2D),
        (0x2D30, 0x2D67),
        (0x2D6F, 0x2D6F),
        (0x2D80, 0x2D96),
        (0x2DA0, 0x2DA6),
        (0x2DA8, 0x2DAE),
        (0x2DB0, 0x2DB6),
        (0x2DB8, 0x2DBE),
        (0x2DC0, 0x2DC6),
        (0x2DC8, 0x2DCE),
        (0x2DD0, 0x2DD6),
        (0x2DD8, 0x2DDE),
        (0x3005, 0x3007),
        (0x3021, 0x3029),
        (0x3031, 0x3035),
        (0x3038, 0x303C),
        (0x3041, 0x3096),
        (0x309B, 0x309F),
        (0x30A1, 0x30FA),
        (0x30FC, 0x30FF),
        (0x3105, 0x312F),
        (0x3131, 0x318E),
        (0x31A0, 0x31BF),
        (0x31F0, 0x31FF),
        (0x3400, 0x4DBF),
        (0x4E00, 0xA48C),
        (0xA4D0, 0xA4FD),
        (0xA500, 0xA60C),
        (0xA610, 0xA61F),
        (0xA62A, 0xA62B),
        (0xA640, 0xA66E),
        (0xA67F, 0xA69D),
        (0xA6A0, 0xA6EF),
        (0xA717, 0xA71F),
        (0xA722, 0xA788),
        (0xA78B, 0xA7CA),
        (0xA7D0, 0xA7D1),
        (0xA7D3, 0xA7D3),
        (0xA7D5, 0xA7D9),
        (0xA7F2, 0xA801),
        (0xA803, 0xA805),
        (0xA807, 0xA80A),
        (0xA80C, 0xA822),
        (0xA840, 0xA873),
        (0xA882, 0xA8B3),
        (0xA8F2, 0xA8F7),
        (0xA8FB, 0xA8FB),
        (0xA8FD, 0xA8FE),
        (0xA90A, 0xA925),
        (0xA930, 0xA946),
        (0xA960, 0xA97C),
        (0xA984, 0xA9B2),
        (0xA9CF, 0xA9CF),
        (0xA9E0, 0xA9E4),
        (0xA9E6, 0xA9EF),
        (0xA9FA, 0xA9FE),
        (0xAA00, 0xAA28),
        (0xAA40, 0xAA42),
        (0xAA44, 0xAA4B),
        (0xAA60, 0xAA76),
        (0xAA7A, 0xAA7A),
        (0xAA7E, 0xAAAF),
        (0xAAB1, 0xAAB1),
        (0xAAB5, 0xAAB6),
        (0xAAB9, 0xAABD),
        (0xAAC0, 0xAAC0),
        (0xAAC2, 0xAAC2),
        (0xAADB, 0xAADD),
        (0xAAE0, 0xAAEA),
        (0xAAF2, 0xAAF4),
        (0xAB01, 0xAB06),
        (0xAB09, 0xAB0E),
        (0xAB11, 0xAB16),
        (0xAB20, 0xAB26),
        (0xAB28, 0xAB2E),
        (0xAB30, 0xAB5A),
        (0xAB5C, 0xAB69),
        (0xAB70, 0xABE2),
        (0xAC00, 0xD7A3),
        (0xD7B0, 0xD7C6),
        (0xD7CB, 0xD7FB),
        (0xF900, 0xFA6D),
        (0xFA70, 0xFAD9),
        (0xFB00, 0xFB06),
        (0xFB13, 0xFB17),
        (0xFB1D, 0xFB1D),
        (0xFB1F, 0xFB28),
        (0xFB2A, 0xFB36),
        (0xFB38, 0xFB3C),
        (0xFB3E, 0xFB3E),
        (0xFB40, 0xFB41),
        (0xFB43, 0xFB44),
        (0xFB46, 0xFBB1),
        (0xFBD3, 0xFD3D),
        (0xFD50, 0xFD8F),
        (0xFD92, 0xFDC7),
        (0xFDF0, 0xFDFB),
        (0xFE70, 0xFE74),
        (0xFE76, 0xFEFC),
        (0xFF21, 0xFF3A),
        (0xFF41, 0xFF5A),
        (0xFF66, 0xFFBE),
        (0xFFC2, 0xFFC7),
        (0xFFCA, 0xFFCF),
        (0xFFD2, 0xFFD7),
        (0xFFDA, 0xFFDC),
        (0x10000, 0x1000B),
        (0x1000D, 0x10026),
        (0x10028, 0x1003A),
        (0x1003C, 0x1003D),
        (0x1003F, 0x1004D),
        (0x10050, 0x1005D),
        (0x10080, 0x100FA),
        (0x10140, 0x10174),
        (0x10280, 0x1029C),
        (0x102A0, 0x102D0),
        (0x10300, 0x1031F),
        (0x1032D, 0x1034A),
        (0x10350, 0x10375),
        (0x10380, 0x1039D),
        (0x103A0, 0x103C3),
        (0x103C8, 0x103CF),
        (0x103D1, 0x103D5),
        (0x10400, 0x1049D),
        (0x104B0, 0x104D3),
        (0x104D8, 0x104FB),
        (0x10500, 0x10527),
        (0x10530, 0x10563),
        (0x10570, 0x1057A),
        (0x1057C, 0x1058A),
        (0x1058C, 0x10592),
        (0x10594, 0x10595),
        (0x10597, 0x105A1),
        (0x105A3, 0x105B1),
        (0x105B3, 0x105B9),
        (0x105BB, 0x105BC),
        (0x10600, 0x10736),
        (0x10740, 0x10755),
        (0x10760, 0x10767),
        (0x10780, 0x10785),
        (0x10787, 0x107B0),
        (0x107B2, 0x107BA),
        (0x10800, 0x10805),
        (0x10808, 0x10808),
        (0x1080A, 0x10835),
        (0x10837, 0x10838),
        (0x1083C, 0x1083C),
        (0x1083F, 0x10855),
        (0x10860, 0x10876),
        (0x10880, 0x1089E),
        (0x108E0, 0x108F2),
        (0x108F4, 0x108F5),
        (0x10900, 0x10915),
        (0x10920, 0x10939),
        (0x10980, 0x109B7),
        (0x109BE, 0x109BF),
        (0x10A00, 0x10A00),
        (0x10A10, 0x10A13),
        (0x10A15, 0x10A17),
        (0x10A19, 0x10A35),
        (0x10A60, 0x10A7C),
        (0x10A80, 0x10A9C),
        (0x10AC0, 0x10AC7),
        (0x10AC9, 0x10AE4),
        (0x10B00, 0x10B35),
        (0x10B40, 0x10B55),
        (0x10B60, 0x10B72),
        (0x10B80, 0x10B91),
        (0x10C00, 0x10C48),
        (0x10C80, 0x10CB2),
        (0x10CC0, 0x10CF2),
        (0x10D00, 0x10D23),
        (0x10E80, 0x10EA9),
        (0x10EB0, 0x10EB1),
        (0x10F00, 0x10F1C),
        (0x10F27, 0x10F27),
        (0x10F30, 0x10F45),
        (0x10F70, 0x10F81),
        (0x10FB0, 0x10FC4),
        (0x10FE0, 0x10FF6),
        (0x11003, 0x11037),
        (0x11071, 0x11072),
        (0x11075, 0x11075),
        (0x11083, 0x110AF),
        (0x110D0, 0x110E8),
        (0x11103, 0x11126),
        (0x11144, 0x11144),
        (0x11147, 0x11147),
        (0x11150, 0x11172),
        (0x11176, 0x11176),
        (0x11183, 0x111B2),
        (0x111C1, 0x111C4),
        (0x111DA, 0x111DA),
        (0x111DC, 0x111DC),
        (0x11200, 0x11211),
        (0x11213, 0x1122B),
        (0x11280, 0x11286),
        (0x11288, 0x11288),
        (0x1128A, 0x1128D),
        (0x1128F, 0x1129D),
        (0x1129F, 0x112A8),
        (0x112B0, 0x112DE),
        (0x11305, 0x1130C),
        (0x1130F, 0x11310),
        (0x11313, 0x11328),
        (0x1132A, 0x11330),
        (0x11332, 0x11333),
        (0x11335, 0x11339),
        (0x1133D, 0x1133D),
        (0x11350, 0x11350),
        (0x1135D, 0x11361),
        (0x11400, 0x11434),
        (0x11447, 0x1144A),
        (0x1145F, 0x11461),
        (0x11480, 0x114AF),
        (0x114C4, 0x114C5),
        (0x114C7, 0x114C7),
        (0x11580, 0x115AE),
        (0x115D8, 0x115DB),
        (0x11600, 0x1162F),
        (0x11644, 0x11644),
        (0x11680, 0x116AA),
        (0x116B8, 0x116B8),
        (0x11700, 0x1171A),
        (0x11740, 0x11746),
        (0x11800, 0x1182B),
        (0x118A0, 0x118DF),
        (0x118FF, 0x11906),
        (0x11909, 0x11909),
        (0x1190C, 0x11913),
        (0x11915, 0x11916),
        (0x11918, 0x1192F),
        (0x1193F, 0x1193F),
        (0x11941, 0x11941),
        (0x119A0, 0x119A7),
        (0x119AA, 0x119D0),
        (0x119E1, 0x119E1),
        (0x119E3, 0x119E3),
        (0x11A00, 0x11A00),
        (0x11A0B, 0x11A32),
        (0x11A3A, 0x11A3A),
        (0x11A50, 0x11A50),
        (0x11A5C, 0x11A89),
        (0x11A9D, 0x11A9D),
        (0x11AB0, 0x11AF8),
        (0x11C00, 0x11C08),
        (0x11C0A, 0x11C2E),
        (0x11C40, 0x11C40),
        (0x11C72, 0x11C8F),
        (0x11D00, 0x11D06),
        (0x11D08, 0x11D09),
        (0x11D0B, 0x11D30),
        (0x11D46, 0x11D46),
        (0x11D60, 0x11D65),
        (0x11D67, 0x11D68),
        (0x11D6A, 0x11D89),
        (0x11D98, 0x11D98),
        (0x11EE0, 0x11EF2),
        (0x11FB0, 0x11FB0),
        (0x12000, 0x12399),
        (0x12400, 0x1246E),
        (0x12480, 0x12543),
        (0x12F90, 0x12FF0),
        (0x13000, 0x1342E),
        (0x14400, 0x14646),
        (0x16800, 0x16A38),
        (0x16A40, 0x16A5E),
        (0x16A70, 0x16ABE),
        (0x16AD0, 0x16AED),
        (0x16B00, 0x16B2F),
        (0x16B40, 0x16B43),
        (0x16B63, 0x16B77),
        (0x16B7D, 0x16B8F),
        (0x16E40, 0x16E7F),
        (0x16F00, 0x16F4A),
        (0x16F50, 0x16F50),
        (0x16F93, 0x16F9F),
        (0x16FE0, 0x16FE1),
        (0x16FE3, 0x16FE3),
        (0x17000, 0x187F7),
        (0x18800, 0x18CD5),
        (0x18D00, 0x18D08),
        (0x1AFF0, 0x1AFF3),
        (0x1AFF5, 0x1AFFB),
        (0x1AFFD, 0x1AFFE),
        (0x1B000, 0x1B122),
        (0x1B150, 0x1B152),
        (0x1B164, 0x1B167),
        (0x1B170, 0x1B2FB),
        (0x1BC00, 0x1BC6A),
        (0x1BC70, 0x1BC7C),
        (0x1BC80, 0x1BC88),
        (0x1BC90, 0x1BC99),
        (0x1D400, 0x1D454),
        (0x1D456, 0x1D49C),
        (0x1D49E, 0x1D49F),
        (0x1D4A2, 0x1D4A2),
        (0x1D4A5, 0x1D4A6),
        (0x1D4A9, 0x1D4AC),
        (0x1D4AE, 0x1D4B9),
        (0x1D4BB, 0x1D4BB),
        (0x1D4BD, 0x1D4C3),
        (0x1D4C5, 0x1D505),
        (0x1D507, 0x1D50A),
        (0x1D50D, 0x1D514),
        (0x1D516, 0x1D51C),
        (0x1D51E, 0x1D539),
        (0x1D53B, 0x1D53E),
        (0x1D540, 0x1D544),
        (0x1D546, 0x1D546),
        (0x1D54A, 0x1D550),
        (0x1D552, 0x1D6A5),
        (0x1D6A8, 0x1D6C0),
        (0x1D6C2, 0x1D6DA),
        (0x1D6DC, 0x1D6FA),
        (0x1D6FC, 0x1D714),
        (0x1D716, 0x1D734),
        (0x1D736, 0x1D74E),
        (0x1D750, 0x1D76E),
        (0x1D770, 0x1D788),
        (0x1D78A, 0x1D7A8),
        (0x1D7AA, 0x1D7C2),
        (0x1D7C4, 0x1D7CB),
        (0x1DF00, 0x1DF1E),
        (0x1E100, 0x1E12C),
        (0x1E137, 0x1E13D),
        (0x1E14E, 0x1E14E),
        (0x1E290, 0x1E2AD),
        (0x1E2C0, 0x1E2EB),
        (0x1E7E0, 0x1E7E6),
        (0x1E7E8, 0x1E7EB),
        (0x1E7ED, 0x1E7EE),
        (0x1E7F0, 0x1E7FE),
        (0x1E800, 0x1E8C4),
        (0x1E900, 0x1E943),
        (0x1E94B, 0x1E94B),
        (0x1EE00, 0x1EE03),
        (0x1EE05, 0x1EE1F),
        (0x1EE21, 0x1EE22),
        (0x1EE24, 0x1EE24),
        (0x1EE27, 0x1EE27),
        (0x1EE29, 0x1EE32),
        (0x1EE34, 0x1EE37),
        (0x1EE39, 0x1EE39),
        (0x1EE3B, 0x1EE3B),
        (0x1EE42, 0x1EE42),
        (0x1EE47, 0x1EE47),
        (0x1EE49, 0x1EE49),
        (0x1EE4B, 0x1EE4B),
        (0x1EE4D, 0x1EE4F),
        (0x1EE51, 0x1EE52),
        (0x1EE54, 0x1EE54),
        (0x1EE57, 0x1EE57),
        (0x1EE59, 0x1EE59),
        (0x1EE5B, 0x1EE5B),
        (0x1EE5D, 0x1EE5D),
        (0x1EE5F, 0x1EE5F),
        (0x1EE61, 0x1EE62),
        (0x1EE64, 0x1EE64),
        (0x1EE67, 0x1EE6A),
        (0x1EE6C, 0x1EE72),
        (0x1EE74, 0x1EE77),
        (0x1EE79, 0x1EE7C),
        (0x1EE7E, 0x1EE7E),
        (0x1EE80, 0x1EE89),
        (0x1EE8B, 0x1EE9B),
        (0x1EEA1, 0x1EEA3),
        (0x1EEA5, 0x1EEA9),
        (0x1EEAB, 0x1EEBB),
        (0x20000, 0x2A6DF),
        (0x2A700, 0x2B738),
        (0x2B740, 0x2B81D),
        (0x2B820, 0x2CEA1),
        (0x2CEB0, 0x2EBE0),
        (0x2F800, 0x2FA1D),
        (0x30000, 0x3134A),
    ];

    pub(crate) const LOWERCASE: &[(u32, u32)] = &[
        (0x0061, 0x007A),
        (0x00AA, 0x00AA),
        (0x00B5, 0x00B5),
        (0x00BA, 0x00BA),
        (0x00DF, 0x00F6),
        (0x00F8, 0x00FF),
        (0x0101, 0x0101),
        (0x0103, 0x0103),
        (0x0105, 0x0105),
        (0x0107, 0x0107),
        (0x0109, 0x0109),
        (0x010B, 0x010B),
        (0x010D, 0x010D),
        (0x010F, 0x010F),
        (0x0111, 0x0111),
        (0x0113, 0x0113),
        (0x0115, 0x0115),
        (0x0117, 0x0117),
        (0x0119, 0x0119),
        (0x011B, 0x011B),
        (0x011D, 0x011D),
        (0x011F, 0x011F),
        (0x0121, 0x0121),
        (0x0123, 0x0123),
        (0x0125, 0x0125),
        (0x0127, 0x0127),
        (0x0129, 0x0129),
        (0x012B, 0x012B),
        (0x012D, 0x012D),
        (0x012F, 0x012F),
        (0x0131, 0x0131),
        (0x0133, 0x0133),
        (0x0135, 0x0135),
        (0x0137, 0x0138),
        (0x013A, 0x013A),
        (0x013C, 0x013C),
        (0x013E, 0x013E),
        (0x0140, 0x0140),
        (0x0142, 0x0142),
        (0x0144, 0x0144),
        (0x0146, 0x0146),
        (0x0148, 0x0149),
        (0x014B, 0x014B),
        (0x014D, 0x014D),
        (0x014F, 0x014F),
        (0x0151, 0x0151),
        (0x0153, 0x0153),
        (0x0155, 0x0155),
        (0x0157, 0x0157),
        (0x0159, 0x0159),
        (0x015B, 0x015B),
        (0x015D, 0x015D),
        (0x015F, 0x015F),
        (0x0161, 0x0161),
        (0x0163, 0x0163),
        (0x0165, 0x0165),
        (0x0167, 0x0167),
        (0x0169, 0x0169),
        (0x016B, 0x016B),
        (0x016D, 0x016D),
        (0x016F, 0x016F),
        (0x0171, 0x0171),
        (0x0173, 0x0173),
        (0x0175, 0x0175),
        (0x0177, 0x0177),
        (0x017A, 0x017A),
        (0x017C, 0x017C),
        (0x017E, 0x0180),
        (0x0183, 0x0183),
        (0x0185, 0x0185),
        (0x0188, 0x0188),
        (0x018C, 0x018D),
        (0x0192, 0x0192),
        (0x0195, 0x0195),
        (0x0199, 0x019B),
        (0x019E, 0x019E),
        (0x01A1, 0x01A1),
        (0x01A3, 0x01A3),
        (0x01A5, 0x01A5),
        (0x01A8, 0x01A8),
        (0x01AA, 0x01AB),
        (0x01AD, 0x01AD),
        (0x01B0, 0x01B0),
        (0x01B4, 0x01B4),
        (0x01B6, 0x01B6),
        (0x01B9, 0x01BA),
        (0x01BD, 0x01BF),
        (0x01C6, 0x01C6),
        (0x01C9, 0x01C9),
        (0x01CC, 0x01CC),
        (0x01CE, 0x01CE),
        (0x01D0, 0x01D0),
        (0x01D2, 0x01D2),
        (0x01D4, 0x01D4),
        (0x01D6, 0x01D6),
        (0x01D8, 0x01D8),
        (0x01DA, 0x01DA),
        (0x01DC, 0x01DD),
        (0x01DF, 0x01DF),
        (0x01E1, 0x01E1),
        (0x01E3, 0x01E3),
        (0x01E5, 0x01E5),
        (0x01E7, 0x01E7),
        (0x01E9, 0x01E9),
        (0x01EB, 0x01EB),
        (0x01ED, 0x01ED),
        (0x01EF, 0x01F0),
        (0x01F3, 0x01F3),
        (0x01F5, 0x01F5),
        (0x01F9, 0x01F9),
        (0x01FB, 0x01FB),
        (0x01FD, 0x01FD),
        (0x01FF, 0x01FF),
        (0x0201, 0x0201),
        (0x0203, 0x0203),
        (0x0205, 0x0205),
        (0x0207, 0x0207),
        (0x0209, 0x0209),
        (0x020B, 0x020B),
        (0x020D, 0x020D),
        (0x020F, 0x020F),
        (0x0211, 0x0211),
        (0x0213, 0x0213),
        (0x0215, 0x0215),
        (0x0217, 0x0217),
        (0x0219, 0x0219),
        (0x021B, 0x021B),
        (0x021D, 0x021D),
        (0x021F, 0x021F),
        (0x0221, 0x0221),
        (0x0223, 0x0223),
        (0x0225, 0x0225),
        (0x0227, 0x0227),
        (0x0229, 0x0229),
        (0x022B, 0x022B),
        (0x022D, 0x022D),
        (0x022F, 0x022F),
        (0x0231, 0x0231),
        (0x0233, 0x0239),
        (0x023C, 0x023C),
        (0x023F, 0x0240),
        (0x0242, 0x0242),
        (0x0247, 0x0247),
        (0x0249, 0x0249),
        (0x024B, 0x024B),
        (0x024D, 0x024D),
        (0x024F, 0x0293),
        (0x0295, 0x02B8),
        (0x02C0, 0x02C1),
        (0x02E0, 0x02E4),
        (0x0345, 0x0345),
        (0x0371, 0x0371),
        (0x0373, 0x0373),
        (0x0377, 0x0377),
        (0x037A, 0x037D),
        (0x0390, 0x0390),
        (0x03AC, 0x03CE),
        (0x03D0, 0x03D1),
        (0x03D5, 0x03D7),
        (0x03D9, 0x03D9),
        (0x03DB, 0x03DB),
        (0x03DD, 0x03DD),
        (0x03DF, 0x03DF),
        (0x03E1, 0x03E1),
        (0x03E3, 0x03E3),
        (0x03E5, 0x03E5),
        (0x03E7, 0x03E7),
        (0x03E9, 0x03E9),
        (0x03EB, 0x03EB),
        (0x03ED, 0x03ED),
        (0x03EF, 0x03F3),
        (0x03F5, 0x03F5),
        (0x03F8, 0x03F8),
        (0x03FB, 0x03FC),
        (0x0430, 0x045F),
        (0x0461, 0x0461),
        (0x0463, 0x0463),
        (0x0465, 0x0465),
        (0x0467, 0x0467),
        (0x0469, 0x0469),
        (0x046B, 0x046B),
        (0x046D, 0x046D),
        (0x046F, 0x046F),
        (0x0471, 0x0471),
        (0x0473, 0x0473),
        (0x0475, 0x0475),
        (0x0477, 0x0477),
        (0x0479, 0x0479),
        (0x047B, 0x047B),
        (0x047D, 0x047D),
        (0x047F, 0x047F),
        (0x0481, 0x0481),
        (0x048B, 0x048B),
        (0x048D, 0x048D),
        (0x048F, 0x048F),
        (0x0491, 0x0491),
        (0x0493, 0x0493),
        (0x0495, 0x0495),
        (0x0497, 0x0497),
        (0x0499, 0x0499),
        (0x049B, 0x049B),
        (0x049D, 0x049D),
        (0x049F, 0x049F),
        (0x04A1, 0x04A1),
        (0x04A3, 0x04A3),
        (0x04A5, 0x04A5),
        (0x04A7, 0x04A7),
        (0x04A9, 0x04A9),
        (0x04AB, 0x04AB),
        (0x04AD, 0x04AD),
        (0x04AF, 0x04AF),
        (0x04B1, 0x04B1),
        (0x04B3, 0x04B3),
        (0x04B5, 0x04B5),
        (0x04B7, 0x04B7),
        (0x04B9, 0x04B9),
        (0x04BB, 0x04BB),
        (0x04BD, 0x04BD),
        (0x04BF, 0x04BF),
        (0x04C2, 0x04C2),
        (0x04C4, 0x04C4),
        (0x04C6, 0x04C6),
        (0x04C8, 0x04C8),
        (0x04CA, 0x04CA),
        (0x04CC, 0x04CC),
        (0x04CE, 0x04CF),
        (0x04D1, 0x04D1),
        (0x04D3, 0x04D3),
        (0x04D5, 0x04D5),
        (0x04D7, 0x04D7),
        (0x04D9, 0x04D9),
        (0x04DB, 0x04DB),
        (0x04DD, 0x04DD),
        (0x04DF, 0x04DF),
        (0x04E1, 0x04E1),
        (0x04E3, 0x04E3),
        (0x04E5, 0x04E5),
        (0x04E7, 0x04E7),
        (0x04E9, 0x04E9),
        (0x04EB, 0x04EB),
        (0x04ED, 0x04ED),
        (0x04EF, 0x04EF),
        (0x04F1, 0x04F1),
        (0x04F3, 0x04F3),
        (0x04F5, 0x04F5),
        (0x04F7, 0x04F7),
        (0x04F9, 0x04F9),
        (0x04FB, 0x04FB),
        (0x04FD, 0x04FD),
        (0x04FF, 0x04FF),
        (0x0501, 0x0501),
        (0x0503, 0x0503),
        (0x0505, 0x0505),
        (0x0507, 0x0507),
        (0x0509, 0x0509),
        (0x050B, 0x050B),
        (0x050D, 0x050D),
        (0x050F, 0x050F),
        (0x0511, 0x0511),
        (0x0513, 0x0513),
        (0x0515, 0x0515),
        (0x0517, 0x0517),
        (0x0519, 0x0519),
        (0x051B, 0x051B),
        (0x051D, 0x051D),
        (0x051F, 0x051F),
        (0x0521, 0x0521),
        (0x0523, 0x0523),
        (0x0525, 0x0525),
        (0x0527, 0x0527),
        (0x0529, 0x0529),
        (0x052B, 0x052B),
        (0x052D, 0x052D),
        (0x052F, 0x052F),
        (0x0560, 0x0588),
        (0x10D0, 0x10FA),
        (0x10FD, 0x10FF),
        (0x13F8, 0x13FD),
        (0x1C80, 0x1C88),
        (0x1D00, 0x1DBF),
        (0x1E01, 0x1E01),
        (0x1E03, 0x1E03),
        (0x1E05, 0x1E05),
        (0x1E07, 0x1E07),
        (0x1E09, 0x1E09),
        (0x1E0B, 0x1E0B),
        (0x1E0D, 0x1E0D),
        (0x1E0F, 0x1E0F),
        (0x1E11, 0x1E11),
        (0x1E13, 0x1E13),
        (0x1E15, 0x1E15),
        (0x1E17, 0x1E17),
        (0x1E19, 0x1E19),
        (0x1E1B, 0x1E1B),
        (0x1E1D, 0x1E1D),
        (0x1E1F, 0x1E1F),
        (0x1E21, 0x1E21),
        (0x1E23, 0x1E23),
        (0x1E25, 0x1E25),
        (0x1E27, 0x1E27),
        (0x1E29, 0x1E29),
        (0x1E2B, 0x1E2B),
        (0x1E2D, 0x1E2D),
        (0x1E2F, 0x1E2F),
        (0x1E31, 0x1E31),
        (0x1E33, 0x1E33),
        (0x1E35, 0x1E35),
        (0x1E37, 0x1E37),
        (0x1E39, 0x1E39),
        (0x1E3B, 0x1E3B),
        (0x1E3D, 0x1E3D),
        (0x1E3F, 0x1E3F),
        (0x1E41, 0x1E41),
        (0x1E43, 0x1E43),
        (0x1E45, 0x1E45),
        (0x1E47, 0x1E47),
        (0x1E49, 0x1E49),
        (0x1E4B, 0x1E4B),
        (0x1E4D, 0x1E4D),
        (0x1E4F, 0x1E4F),
        (0x1E51, 0x1E51),
        (0x1E53, 0x1E53),
        (0x1E55, 0x1E55),
        (0x1E57, 0x1E57),
        (0x1E59, 0x1E59),
        (0x1E5B, 0x1E5B),
        (0x1E5D, 0x1E5D),
        (0x1E5F, 0x1E5F),
        (0x1E61, 0x1E61),
        (0x1E63, 0x1E63),
        (0x1E65, 0x1E65),
        (0x1E67, 0x1E67),
        (0x1E69, 0x1E69),
        (0x1E6B, 0x1E6B),
        (0x1E6D, 0x1E6D),
        (0x1E6F, 0x1E6F),
        (0x1E71, 0x1E71),
        (0x1E73, 0x1E73),
        (0x1E75, 0x1E75),
        (0x1E77, 0x1E77),
        (0x1E79, 0x1E79),
        (0x1E7B, 0x1E7B),
        (0x1E7D, 0x1E7D),
        (0x1E7F, 0x1E7F),
        (0x1E81, 0x1E81),
        (0x1E83, 0x1E83),
        (0x1E85, 0x1E85),
        (0x1E87, 0x1E87),
        (0x1E89, 0x1E89),
        (0x1E8B, 0x1E8B),
        (0x1E8D, 0x1E8D),
        (0x1E8F, 0x1E8F),
        (0x1E91, 0x1E91),
        (0x1E93, 0x1E93),
        (0x1E95, 0x1E9D),
        (0x1E9F, 0x1E9F),
        (0x1EA1, 0x1EA1),
        (0x1EA3, 0x1EA3),
        (0x1EA5, 0x1EA5),
        (0x1EA7, 0x1EA7),
        (0x1EA9, 0x1EA9),
        (0x1EAB, 0x1EAB),
        (0x1EAD, 0x1EAD),
        (0x1EAF, 0x1EAF),
        (0x1EB1, 0x1EB1),
        (0x1EB3, 0x1EB3),
        (0x1EB5, 0x1EB5),
        (0x1EB7, 0x1EB7),
        (0x1EB9, 0x1EB9),
        (0x1EBB, 0x1EBB),
        (0x1EBD, 0x1EBD),
        (0x1EBF, 0x1EBF),
        (0x1EC1, 0x1EC1),
        (0x1EC3, 0x1EC3),
        (0x1EC5, 0x1EC5),
        (0x1EC7, 0x1EC7),
        (0x1EC9, 0x1EC9),
        (0x1ECB, 0x1ECB),
        (0x1ECD, 0x1ECD),
        (0x1ECF, 0x1ECF),
        (0x1ED1, 0x1ED1),
        (0x1ED3, 0x1ED3),
        (0x1ED5, 0x1ED5),
        (0x1ED7, 0x1ED7),
        (0x1ED9, 0x1ED9),
        (0x1EDB, 0x1EDB),
        (0x1EDD, 0x1EDD),
        (0x1EDF, 0x1EDF),
        (0x1EE1, 0x1EE1),
        (0x1EE3, 0x1EE3),
        (0x1EE5, 0x1EE5),
        (0x1EE7, 0x1EE7),
        (0x1EE9, 0x1EE9),
        (0x1EEB, 0x1EEB),
        (0x1EED, 0x1EED),
        (0x1EEF, 0x1EEF),
        (0x1EF1, 0x1EF1),
        (0x1EF3, 0x1EF3),
        (0x1EF5, 0x1EF5),
        (0x1EF7, 0x1EF7),
        (0x1EF9, 0x1EF9),
        (0x1EFB, 0x1EFB),
        (0x1EFD, 0x1EFD),
        (0x1EFF, 0x1F07),
        (0x1F10, 0x1F15),
        (0x1F20, 0x1F27),
        (0x1F30, 0x1F37),
        (0x1F40, 0x1F45),
        (0x1F50, 0x1F57),
        (0x1F60, 0x1F67),
        (0x1F70, 0x1F7D),
        (0x1F80, 0x1F87),
        (0x1F90, 0x1F97),
        (0x1FA0, 0x1FA7),
        (0x1FB0, 0x1FB4),
        (0x1FB6, 0x1FB7),
        (0x1FBE, 0x1FBE),
        (0x1FC2, 0x1FC4),
        (0x1FC6, 0x1FC7),
        (0x1FD0, 0x1FD3),
        (0x1FD6, 0x1FD7),
        (0x1FE0, 0x1FE7),
        (0x1FF2, 0x1FF4),
        (0x1FF6, 0x1FF7),
        (0x2071, 0x2071),
        (0x207F, 0x207F),
        (0x2090, 0x209C),
        (0x210A, 0x210A),
        (0x210E, 0x210F),
        (0x2113, 0x2113),
        (0x212F, 0x212F),
        (0x2134, 0x2134),
        (0x2139, 0x2139),
        (0x213C, 0x213D),
        (0x2146, 0x2149),
        (0x214E, 0x214E),
        (0x2170, 0x217F),
        (0x2184, 0x2184),
        (0x24D0, 0x24E9),
        (0x2C30, 0x2C5F),
        (0x2C61, 0x2C61),
        (0x2C65, 0x2C66),
        (0x2C68, 0x2C68),
        (0x2C6A, 0x2C6A),
        (0x2C6C, 0x2C6C),
        (0x2C71, 0x2C71),
        (0x2C73, 0x2C74),
        (0x2C76, 0x2C7D),
        (0x2C81, 0x2C81),
        (0x2C83, 0x2C83),
        (0x2C85, 0x2C85),
        (0x2C87, 0x2C87),
        (0x2C89, 0x2C89),
        (0x2C8B, 0x2C8B),
        (0x2C8D, 0x2C8D),
        (0x2C8F, 0x2C8F),
        (0x2C91, 0x2C91),
        (0x2C93, 0x2C93),
        (0x2C95, 0x2C95),
        (0x2C97, 0x2C97),
        (0x2C99, 0x2C99),
        (0x2C9B, 0x2C9B),
        (0x2C9D, 0x2C9D),
        (0x2C9F, 0x2C9F),
        (0x2CA1, 0x2CA1),
        (0x2CA3, 0x2CA3),
        (0x2CA5, 0x2CA5),
        (0x2CA7, 0x2CA7),
        (0x2CA9, 0x2CA9),
        (0x2CAB, 0x2CAB),
        (0x2CAD, 0x2CAD),
        (0x2CAF, 0x2CAF),
        (0x2CB1, 0x2CB1),
        (0x2CB3, 0x2CB3),
        (0x2CB5, 0x2CB5),
        (0x2CB7, 0x2CB7),
        (0x2CB9, 0x2CB9),
        (0x2CBB, 0x2CBB),
        (0x2CBD, 0x2CBD),
        (0x2CBF, 0x2CBF),
        (0x2CC1, 0x2CC1),
        (0x2CC3, 0x2CC3),
        (0x2CC5, 0x2CC5),
        (0x2CC7, 0x2CC7),
        (0x2CC9, 0x2CC9),
        (0x2CCB, 0x2CCB),
        (0x2CCD, 0x2CCD),
        (0x2CCF, 0x2CCF),
        (0x2CD1, 0x2CD1),
        (0x2CD3, 0x2CD3),
        (0x2CD5, 0x2CD5),
        (0x2CD7, 0x2CD7),
        (0x2CD9, 0x2CD9),
        (0x2CDB, 0x2CDB),
        (0x2CDD, 0x2CDD),
        (0x2CDF, 0x2CDF),
        (0x2CE1, 0x2CE1),
        (0x2CE3, 0x2CE4),
        (0x2CEC, 0x2CEC),
        (0x2CEE, 0x2CEE),
        (0x2CF3, 0x2CF3),
        (0x2D00, 0x2D25),
        (0x2D27, 0x2D27),
        (0x2D2D, 0x2D2D),
        (0xA641, 0xA641),
        (0xA643, 0xA643),
        (0xA645, 0xA645),
        (0xA647, 0xA647),
        (0xA649, 0xA649),
        (0xA64B, 0xA64B),
        (0xA64D, 0xA64D),
        (0xA64F, 0xA64F),
        (0xA651, 0xA651),
        (0xA653, 0xA653),
        (0xA655, 0xA655),
        (0xA657, 0xA657),
        (0xA659, 0xA659),
        (0xA65B, 0xA65B),
        (0xA65D, 0xA65D),
        (0xA65F, 0xA65F),
        (0xA661, 0xA661),
        (0xA663, 0xA663),
        (0xA665, 0xA665),
        (0xA667, 0xA667),
        (0xA669, 0xA669),
        (0xA66B, 0xA66B),
        (0xA66D, 0xA66D),
        (0xA681, 0xA681),
        (0xA683, 0xA683),
        (0xA685, 0xA685),
        (0xA687, 0xA687),
        (0xA689, 0xA689),
        (0xA68B, 0xA68B),
        (0xA68D, 0xA68D),
        (0xA68F, 0xA68F),
        (0xA691, 0xA691),
        (0xA693, 0xA693),
        (0xA695, 0xA695),
        (0xA697, 0xA697),
        (0xA699, 0xA699),
        (0xA69B, 0xA69D),
        (0xA723, 0xA723),
        (0xA725, 0xA725),
        (0xA727, 0xA727),
        (0xA729, 0xA729),
        (0xA72B, 0xA72B),
        (0xA72D, 0xA72D),
        (0xA72F, 0xA731),
        (0xA733, 0xA733),
        (0xA735, 0xA735),
        (0xA737, 0xA737),
        (0xA739, 0xA739),
        (0xA73B, 0xA73B),
        (0xA73D, 0xA73D),
        (0xA73F, 0xA73F),
        (0xA741, 0xA741),
        (0xA743, 0xA743),
        (0xA745, 0xA745),
        (0xA747, 0xA747),
        (0xA749, 0xA749),
        (0xA74B, 0xA74B),
        (0xA74D, 0xA74D),
        (0xA74F, 0xA74F),
        (0xA751, 0xA751),
        (0xA753, 0xA753),
        (0xA755, 0xA755),
        (0xA757, 0xA757),
        (0xA759, 0xA759),
        (0xA75B, 0xA75B),
        (0xA75D, 0xA75D),
        (0xA75F, 0xA75F),
        (0xA761, 0xA761),
        (0xA763, 0xA763),
        (0xA765, 0xA765),
        (0xA767, 0xA767),
        (0xA769, 0xA769),
        (0xA76B, 0xA76B),
        (0xA76D, 0xA76D),
        (0xA76F, 0xA778),
        (0xA77A, 0xA77A),
        (0xA77C, 0xA77C),
        (0xA77F, 0xA77F),
        (0xA781, 0xA781),
        (0xA783, 0xA783),
        (0xA785, 0xA785),
        (0xA787, 0xA787),
        (0xA78C, 0xA78C),
        (0xA78E, 0xA78E),
        (0xA791, 0xA791),
        (0xA793, 0xA795),
        (0xA797, 0xA797),
        (0xA799, 0xA799),
        (0xA79B, 0xA79B),
        (0xA79D, 0xA79D),
        (0xA79F, 0xA79F),
        (0xA7A1, 0xA7A1),
        (0xA7A3, 0xA7A3),
        (0xA7A5, 0xA7A5),
        (0xA7A7, 0xA7A7),
        (0xA7A9, 0xA7A9),
        (0xA7AF, 0xA7AF),
        (0xA7B5, 0xA7B5),
        (0xA7B7, 0xA7B7),
        (0xA7B9, 0xA7B9),
        (0xA7BB, 0xA7BB),
        (0xA7BD, 0xA7BD),
        (0xA7BF, 0xA7BF),
        (0xA7C1, 0xA7C1),
        (0xA7C3, 0xA7C3),
        (0xA7C8, 0xA7C8),
        (0xA7CA, 0xA7CA),
        (0xA7D1, 0xA7D1),
        (0xA7D3, 0xA7D3),
        (0xA7D5, 0xA7D5),
        (0xA7D7, 0xA7D7),
        (0xA7D9, 0xA7D9),
        (0xA7F6, 0xA7F6),
        (0xA7F8, 0xA7FA),
        (0xAB30, 0xAB5A),
        (0xAB5C, 0xAB68),
        (0xAB70, 0xABBF),
        (0xFB00, 0xFB06),
        (0xFB13, 0xFB17),
        (0xFF41, 0xFF5A),
        (0x10428, 0x1044F),
        (0x104D8, 0x104FB),
        (0x10597, 0x105A1),
        (0x105A3, 0x105B1),
        (0x105B3, 0x105B9),
        (0x105BB, 0x105BC),
        (0x10780, 0x10780),
        (0x10783, 0x10785),
        (0x10787, 0x107B0),
        (0x107B2, 0x107BA),
        (0x10CC0, 0x10CF2),
        (0x118C0, 0x118DF),
        (0x16E60, 0x16E7F),
        (0x1D41A, 0x1D433),
        (0x1D44E, 0x1D454),
        (0x1D456, 0x1D467),
        (0x1D482, 0x1D49B),
        (0x1D4B6, 0x1D4B9),
        (0x1D4BB, 0x1D4BB),
        (0x1D4BD, 0x1D4C3),
        (0x1D4C5, 0x1D4CF),
        (0x1D4EA, 0x1D503),
        (0x1D51E, 0x1D537),
        (0x1D552, 0x1D56B),
        (0x1D586, 0x1D59F),
        (0x1D5BA, 0x1D5D3),
        (0x1D5EE, 0x1D607),
        (0x1D622, 0x1D63B),
        (0x1D656, 0x1D66F),
        (0x1D68A, 0x1D6A5),
        (0x1D6C2, 0x1D6DA),
        (0x1D6DC, 0x1D6E1),
        (0x1D6FC, 0x1D714),
        (0x1D716, 0x1D71B),
        (0x1D736, 0x1D74E),
        (0x1D750, 0x1D755),
        (0x1D770, 0x1D788),
        (0x1D78A, 0x1D78F),
        (0x1D7AA, 0x1D7C2),
        (0x1D7C4, 0x1D7C9),
        (0x1D7CB, 0x1D7CB),
        (0x1DF00, 0x1DF09),
        (0x1DF0B, 0x1DF1E),
        (0x1E922, 0x1E943),
    ];

    pub(crate) const PATTERN_SYNTAX: &[(u32, u32)] = &[
        (0x0021, 0x002F),
        (0x003A, 0x0040),
        (0x005B, 0x005E),
        (0x0060, 0x0060),
        (0x007B, 0x007E),
        (0x00A1, 0x00A7),
        (0x00A9, 0x00A9),
        (0x00AB, 0x00AC),
        (0x00AE, 0x00AE),
        (0x00B0, 0x00B1),
        (0x00B6, 0x00B6),
        (0x00BB, 0x00BB),
        (0x00BF, 0x00BF),
        (0x00D7, 0x00D7),
        (0x00F7, 0x00F7),
        (0x2010, 0x2027),
        (0x2030, 0x203E),
        (0x2041, 0x2053),
        (0x2055, 0x205E),
        (0x2190, 0x245F),
        (0x2500, 0x2775),
        (0x2794, 0x2BFF),
        (0x2E00, 0x2E7F),
        (0x3001, 0x3003),
        (0x3008, 0x3020),
        (0x3030, 0x3030),
        (0xFD3E, 0xFD3F),
        (0xFE45, 0xFE46),
    ];

    pub(crate) const PATTERN_WHITE_SPACE: &[(u32, u32)] = &[
        (0x0009, 0x000D),
        (0x0020, 0x0020),
        (0x0085, 0x0085),
        (0x200E, 0x200F),
        (0x2028, 0x2029),
    ];

    pub(crate) const SENTENCE_TERMINAL: &[(u32, u32)] = &[
        (0x0021, 0x0021),
        (0x002E, 0x002E),
        (0x003F, 0x003F),
        (0x0589, 0x0589),
        (0x061D, 0x061F),
        (0x06D4, 0x06D4),
        (0x0700, 0x0702),
        (0x07F9, 0x07F9),
        (0x0837, 0x0837),
        (0x0839, 0x0839),
        (0x083D, 0x083E),
        (0x0964, 0x0965),
        (0x104A, 0x104B),
        (0x1362, 0x1362),
        (0x1367, 0x1368),
        (0x166E, 0x166E),
        (0x1735, 0x1736),
        (0x1803, 0x1803),
        (0x1809, 0x1809),
        (0x1944, 0x1945),
        (0x1AA8, 0x1AAB),
        (0x1B5A, 0x1B5B),
        (0x1B5E, 0x1B5F),
        (0x1B7D, 0x1B7E),
        (0x1C3B, 0x1C3C),
        (0x1C7E, 0x1C7F),
        (0x203C, 0x203D),
        (0x2047, 0x2049),
        (0x2E2E, 0x2E2E),
        (0x2E3C, 0x2E3C),
        (0x2E53, 0x2E54),
        (0x3002, 0x3002),
        (0xA4FF, 0xA4FF),
        (0xA60E, 0xA60F),
        (0xA6F3, 0xA6F3),
        (0xA6F7, 0xA6F7),
        (0xA876, 0xA877),
        (0xA8CE, 0xA8CF),
        (0xA92F, 0xA92F),
        (0xA9C8, 0xA9C9),
        (0xAA5D, 0xAA5F),
        (0xAAF0, 0xAAF1),
        (0xABEB, 0xABEB),
        (0xFE52, 0xFE52),
        (0xFE56, 0xFE57),
        (0xFF01, 0xFF01),
        (0xFF0E, 0xFF0E),
        (0xFF1F, 0xFF1F),
        (0xFF61, 0xFF61),
        (0x10A56, 0x10A57),
        (0x10F55, 0x10F59),
        (0x10F86, 0x10F89),
        (0x11047, 0x11048),
        (0x110BE, 0x110C1),
        (0x11141, 0x11143),
        (0x111C5, 0x111C6),
        (0x111CD, 0x111CD),
        (0x111DE, 0x111DF),
        (0x11238, 0x11239),
        (0x1123B, 0x1123C),
        (0x112A9, 0x112A9),
        (0x1144B, 0x1144C),
        (0x115C2, 0x115C3),
        (0x115C9, 0x115D7),
        (0x11641, 0x11642),
        (0x1173C, 0x1173E),
        (0x11944, 0x11944),
        (0x11946, 0x11946),
        (0x11A42, 0x11A43),
        (0x11A9B, 0x11A9C),
        (0x11C41, 0x11C42),
        (0x11EF7, 0x11EF8),
        (0x16A6E, 0x16A6F),
        (0x16AF5, 0x16AF5),
        (0x16B37, 0x16B38),
        (0x16B44, 0x16B44),
        (0x16E98, 0x16E98),
        (0x1BC9F, 0x1BC9F),
        (0x1DA88, 0x1DA88),
    ];

    pub(crate) const UPPERCASE: &[(u32, u32)] = &[
        (0x0041, 0x005A),
        (0x00C0, 0x00D6),
        (0x00D8, 0x00DE),
        (0x0100, 0x0100),
        (0x0102, 0x0102),
        (0x0104, 0x0104),
        (0x0106, 0x0106),
        (0x0108, 0x0108),
        (0x010A, 0x010A),
        (0x010C, 0x010C),
        (0x010E, 0x010E),
        (0x0110, 0x0110),
        (0x0112, 0x0112),
        (0x0114, 0x0114),
        (0x0116, 0x0116),
        (0x0118, 0x0118),
        (0x011A, 0x011A),
        (0x011C, 0x011C),
        (0x011E, 0x011E),
        (0x0120, 0x0120),
        (0x0122, 0x0122),
        (0x0124, 0x0124),
        (0x0126, 0x0126),
        (0x0128, 0x0128),
        (0x012A, 0x012A),
        (0x012C, 0x012C),
        (0x012E, 0x012E),
        (0x0130, 0x0130),
        (0x0132, 0x0132),
        (0x0134, 0x0134),
        (0x0136, 0x0136),
        (0x0139, 0x0139),
        (0x013B, 0x013B),
        (0x013D, 0x013D),
        (0x013F, 0x013F),
        (0x0141, 0x0141),
        (0x0143, 0x0143),
        (0x0145, 0x0145),
        (0x0147, 0x0147),
        (0x014A, 0x014A),
        (0x014C, 0x014C),
        (0x014E, 0x014E),
        (0x0150, 0x0150),
        (0x0152, 0x0152),
        (0x0154, 0x0154),
        (0x0156, 0x0156),
        (0x0158, 0x0158),
        (0x015A, 0x015A),
        (0x015C, 0x015C),
        (0x015E, 0x015E),
        (0x0160, 0x0160),
        (0x0162, 0x0162),
        (0x0164, 0x0164),
        (0x0166, 0x0166),
        (0x0168, 0x0168),
        (0x016A, 0x016A),
        (0x016C, 0x016C),
        (0x016E, 0x016E),
        (0x0170, 0x0170),
        (0x0172, 0x0172),
        (0x0174, 0x0174),
        (0x0176, 0x0176),
        (0x0178, 0x0179),
        (0x017B, 0x017B),
        (0x017D, 0x017D),
        (0x0181, 0x0182),
        (0x0184, 0x0184),
        (0x0186, 0x0187),
        (0x0189, 0x018B),
        (0x018E, 0x0191),
        (0x0193, 0x0194),
        (0x0196, 0x0198),
        (0x019C, 0x019D),
        (0x019F, 0x01A0),
        (0x01A2, 0x01A2),
        (0x01A4, 0x01A4),
        (0x01A6, 0x01A7),
        (0x01A9, 0x01A9),
        (0x01AC, 0x01AC),
        (0x01AE, 0x01AF),
        (0x01B1, 0x01B3),
        (0x01B5, 0x01B5),
        (0x01B7, 0x01B8),
        (0x01BC, 0x01BC),
        (0x01C4, 0x01C4),
        (0x01C7, 0x01C7),
        (0x01CA, 0x01CA),
        (0x01CD, 0x01CD),
        (0x01CF, 0x01CF),
        (0x01D1, 0x01D1),
        (0x01D3, 0x01D3),
        (0x01D5, 0x01D5),
        (0x01D7, 0x01D7),
        (0x01D9, 0x01D9),
        (0x01DB, 0x01DB),
        (0x01DE, 0x01DE),
        (0x01E0, 0x01E0),
        (0x01E2, 0x01E2),
        (0x01E4, 0x01E4),
        (0x01E6, 0x01E6),
        (0x01E8, 0x01E8),
        (0x01EA, 0x01EA),
        (0x01EC, 0x01EC),
        (0x01EE, 0x01EE),
        (0x01F1, 0x01F1),
        (0x01F4, 0x01F4),
        (0x01F6, 0x01F8),
        (0x01FA, 0x01FA),
        (0x01FC, 0x01FC),
        (0x01FE, 0x01FE),
        (0x0200, 0x0200),
        (0x0202, 0x0202),
        (0x0204, 0x0204),
        (0x0206, 0x0206),
        (0x0208, 0x0208),
        (0x020A, 0x020A),
        (0x020C, 0x020C),
        (0x020E, 0x020E),
        (0x0210, 0x0210),
        (0x0212, 0x0212),
        (0x0214, 0x0214),
        (0x0216, 0x0216),
        (0x0218, 0x0218),
        (0x021A, 0x021A),
        (0x021C, 0x021C),
        (0x021E, 0x021E),
        (0x0220, 0x0220),
        (0x0222, 0x0222),
        (0x0224, 0x0224),
        (0x0226, 0x0226),
        (0x0228, 0x0228),
        (0x022A, 0x022A),
        (0x022C, 0x022C),
        (0x022E, 0x022E),
        (0x0230, 0x0230),
        (0x0232, 0x0232),
        (0x023A, 0x023B),
        (0x023D, 0x023E),
        (0x0241, 0x0241),
        (0x0243, 0x0246),
        (0x0248, 0x0248),
        (0x024A, 0x024A),
        (0x024C, 0x024C),
        (0x024E, 0x024E),
        (0x0370, 0x0370),
        (0x0372, 0x0372),
        (0x0376, 0x0376),
        (0x037F, 0x037F),
        (0x0386, 0x0386),
        (0x0388, 0x038A),
        (0x038C, 0x038C),
        (0x038E, 0x038F),
        (0x0391, 0x03A1),
        (0x03A3, 0x03AB),
        (0x03CF, 0x03CF),
        (0x03D2, 0x03D4),
        (0x03D8, 0x03D8),
        (0x03DA, 0x03DA),
        (0x03DC, 0x03DC),
        (0x03DE, 0x03DE),
        (0x03E0, 0x03E0),
        (0x03E2, 0x03E2),
        (0x03E4, 0x03E4),
        (0x03E6, 0x03E6),
        (0x03E8, 0x03E8),
        (0x03EA, 0x03EA),
        (0x03EC, 0x03EC),
        (0x03EE, 0x03EE),
        (0x03F4, 0x03F4),
        (0x03F7, 0x03F7),
        (0x03F9, 0x03FA),
        (0x03FD, 0x042F),
        (0x0460, 0x0460),
        (0x0462, 0x0462),
        (0x0464, 0x0464),
        (0x0466, 0x0466),
        (0x0468, 0x0468),
        (0x046A, 0x046A),
        (0x046C, 0x046C),
        (0x046E, 0x046E),
        (0x0470, 0x0470),
        (0x0472, 0x0472),
        (0x0474, 0x0474),
        (0x0476, 0x0476),
        (0x0478, 0x0478),
        (0x047A, 0x047A),
        (0x047C, 0x047C),
        (0x047E, 0x047E),
        (0x0480, 0x0480),
        (0x048A, 0x048A),
        (0x048C, 0x048C),
        (0x048E, 0x048E),
        (0x0490, 0x0490),
        (0x0492, 0x0492),
        (0x0494, 0x0494),
        (0x0496, 0x0496),
        (0x0498, 0x0498),
        (0x049A, 0x049A),
        (0x049C, 0x049C),
        (0x049E, 0x049E),
        (0x04A0, 0x04A0),
        (0x04A2, 0x04A2),
        (0x04A4, 0x04A4),
        (0x04A6, 0x04A6),
        (0x04A8, 0x04A8),
        (0x04AA, 0x04AA),
        (0x04AC, 0x04AC),
        (0x04AE, 0x04AE),
        (0x04B0, 0x04B0),
        (0x04B2, 0x04B2),
        (0x04B4, 0x04B4),
        (0x04B6, 0x04B6),
        (0x04B8, 0x04B8),
        (0x04BA, 0x04BA),
        (0x04BC, 0x04BC),
        (0x04BE, 0x04BE),
        (0x04C0, 0x04C1),
        (0x04C3, 0x04C3),
        (0x04C5, 0x04C5),
        (0x04C7, 0x04C7),
        (0x04C9, 0x04C9),
        (0x04CB, 0x04CB),
        (0x04CD, 0x04CD),
        (0x04D0, 0x04D0),
        (0x04D2, 0x04D2),
        (0x04D4, 0x04D4),
        (0x04D6, 0x04D6),
        (0x04D8, 0x04D8),
        (0x04DA, 0x04DA),
        (0x04DC, 0x04DC),
        (0x04DE, 0x04DE),
        (0x04E0, 0x04E0),
        (0x04E2, 0x04E2),
        (0x04E4, 0x04E4),
        (0x04E6, 0x04E6),
        (0x04E8, 0x04E8),
        (0x04EA, 0x04EA),
        (0x04EC, 0x04EC),
        (0x04EE, 0x04EE),
        (0x04F0, 0x04F0),
        (0x04F2, 0x04F2),
        (0x04F4, 0x04F4),
        (0x04F6, 0x04F6),
        (0x04F8, 0x04F8),
        (0x04FA, 0x04FA),
        (0x04FC, 0x04FC),
        (0x04FE, 0x04FE),
        (0x0500, 0x0500),
        (0x0502, 0x0502),
        (0x0504, 0x0504),
        (0x0506, 0x0506),
        (0x0508, 0x0508),
        (0x050A, 0x050A),
        (0x050C, 0x050C),
        (0x050E, 0x050E),
        (0x0510, 0x0510),
        (0x0512, 0x0512),
        (0x0514, 0x0514),
        (0x0516, 0x0516),
        (0x0518, 0x0518),
        (0x051A, 0x051A),
        (0x051C, 0x051C),
        (0x051E, 0x051E),
        (0x0520, 0x0520),
        (0x0522, 0x0522),
        (0x0524, 0x0524),
        (0x0526, 0x0526),
        (0x0528, 0x0528),
        (0x052A, 0x052A),
        (0x052C, 0x052C),
        (0x052E, 0x052E),
        (0x0531, 0x0556),
        (0x10A0, 0x10C5),
        (0x10C7, 0x10C7),
        (0x10CD, 0x10CD),
        (0x13A0, 0x13F5),
        (0x1C90, 0x1CBA),
        (0x1CBD, 0x1CBF),
        (0x1E00, 0x1E00),
        (0x1E02, 0x1E02),
        (0x1E04, 0x1E04),
        (0x1E06, 0x1E06),
        (0x1E08, 0x1E08),
        (0x1E0A, 0x1E0A),
        (0x1E0C, 0x1E0C),
        (0x1E0E, 0x1E0E),
        (0x1E10, 0x1E10),
        (0x1E12, 0x1E12),
        (0x1E14, 0x1E14),
        (0x1E16, 0x1E16),
        (0x1E18, 0x1E18),
        (0x1E1A, 0x1E1A),
        (0x1E1C, 0x1E1C),
        (0x1E1E, 0x1E1E),
        (0x1E20, 0x1E20),
        (0x1E22, 0x1E22),
        (0x1E24, 0x1E24),
        (0x1E26, 0x1E26),
        (0x1E28, 0x1E28),
        (0x1E2A, 0x1E2A),
        (0x1E2C, 0x1E2C),
        (0x1E2E, 0x1E2E),
        (0x1E30, 0x1E30),
        (0x1E32, 0x1E32),
        (0x1E34, 0x1E34),
        (0x1E36, 0x1E36),
        (0x1E38, 0x1E38),
        (0x1E3A, 0x1E3A),
        (0x1E3C, 0x1E3C),
        (0x1E3E, 0x1E3E),
        (0x1E40, 0x1E40),
        (0x1E42, 0x1E42),
        (0x1E44, 0x1E44),
        (0x1E46, 0x1E46),
        (0x1E48, 0x1E48),
        (0x1E4A, 0x1E4A),
        (0x1E4C, 0x1E4C),
        (0x1E4E, 0x1E4E),
        (0x1E50, 0x1E50),
        (0x1E52, 0x1E52),
        (0x1E54, 0x1E54),
        (0x1E56, 0x1E56),
        (0x1E58, 0x1E58),
        (0x1E5A, 0x1E5A),
        (0x1E5C, 0x1E5C),
        (0x1E5E, 0x1E5E),
        (0x1E60, 0x1E60),
        (0x1E62, 0x1E62),
        (0x1E64, 0x1E64),
        (0x1E66, 0x1E66),
        (0x1E68, 0x1E68),
        (0x1E6A, 0x1E6A),
        (0x1E6C, 0x1E6C),
        (0x1E6E, 0x1E6E),
        (0x1E70, 0x1E70),
        (0x1E72, 0x1E72),
        (0x1E74, 0x1E74),
        (0x1E76, 0x1E76),
        (0x1E78, 0x1E78),
        (0x1E7A, 0x1E7A),
        (0x1E7C, 0x1E7C),
        (0x1E7E, 0x1E7E),
        (0x1E80, 0x1E80),
        (0x1E82, 0x1E82),
        (0x1E84, 0x1E84),
        (0x1E86, 0x1E86),
        (0x1E88, 0x1E88),
        (0x1E8A, 0x1E8A),
        (0x1E8C, 0x1E8C),
        (0x1E8E, 0x1E8E),
        (0x1E90, 0x1E90),
        (0x1E92, 0x1E92),
        (0x1E94, 0x1E94),
        (0x1E9E, 0x1E9E),
        (0x1EA0, 0x1EA0),
        (0x1EA2, 0x1EA2),
        (0x1EA4, 0x1EA4),
        (0x1EA6, 0x1EA6),
        (0x1EA8, 0x1EA8),
        (0x1EAA, 0x1EAA),
        (0x1EAC, 0x1EAC),
        (0x1EAE, 0x1EAE),
        (0x1EB0, 0x1EB0),
        (0x1EB2, 0x1EB2),
        (0x1EB4, 0x1EB4),
        (0x1EB6, 0x1EB6),
        (0x1EB8, 0x1EB8),
        (0x1EBA, 0x1EBA),
        (0x1EBC, 0x1EBC),
        (0x1EBE, 0x1EBE),
        (0x1EC0, 0x1EC0),
        (0x1EC2, 0x1EC2),
        (0x1EC4, 0x1EC4),
        (0x1EC6, 0x1EC6),
        (0x1EC8, 0x1EC8),
        (0x1ECA, 0x1ECA),
        (0x1ECC, 0x1ECC),
        (0x1ECE, 0x1ECE),
        (0x1ED0, 0x1ED0),
        (0x1ED2, 0x1ED2),
        (0x1ED4, 0x1ED4),
        (0x1ED6, 0x1ED6),
        (0x1ED8, 0x1ED8),
        (0x1EDA, 0x1EDA),
        (0x1EDC, 0x1EDC),
        (0x1EDE, 0x1EDE),
        (0x1EE0, 0x1EE0),
        (0x1EE2, 0x1EE2),
        (0x1EE4, 0x1EE4),
        (0x1EE6, 0x1EE6),
        (0x1EE8, 0x1EE8),
        (0x1EEA, 0x1EEA),
        (0x1EEC, 0x1EEC),
        (0x1EEE, 0x1EEE),
        (0x1EF0, 0x1EF0),
        (0x1EF2, 0x1EF2),
        (0x1EF4, 0x1EF4),
        (0x1EF6, 0x1EF6),
        (0x1EF8, 0x1EF8),
        (0x1EFA, 0x1EFA),
        (0x1EFC, 0x1EFC),
        (0x1EFE, 0x1EFE),
        (0x1F08, 0x1F0F),
        (0x1F18, 0x1F1D),
        (0x1F28, 0x1F2F),
        (0x1F38, 0x1F3F),
        (0x1F48, 0x1F4D),
        (0x1F59, 0x1F59),
        (0x1F5B, 0x1F5B),
        (0x1F5D, 0x1F5D),
        (0x1F5F, 0x1F5F),
        (0x1F68, 0x1F6F),
        (0x1FB8, 0x1FBB),
        (0x1FC8, 0x1FCB),
        (0x1FD8, 0x1FDB),
        (0x1FE8, 0x1FEC),
        (0x1FF8, 0x1FFB),
        (0x2102, 0x2102),
        (0x2107, 0x2107),
        (0x210B, 0x210D),
        (0x2110, 0x2112),
        (0x2115, 0x2115),
        (0x2119, 0x211D),
        (0x2124, 0x2124),
        (0x2126, 0x2126),
        (0x2128, 0x2128),
        (0x212A, 0x212D),
        (0x2130, 0x2133),
        (0x213E, 0x213F),
        (0x2145, 0x2145),
        (0x2160, 0x216F),
        (0x2183, 0x2183),
        (0x24B6, 0x24CF),
        (0x2C00, 0x2C2F),
        (0x2C60, 0x2C60),
        (0x2C62, 0x2C64),
        (0x2C67, 0x2C67),
        (0x2C69, 0x2C69),
        (0x2C6B, 0x2C6B),
        (0x2C6D, 0x2C70),
        (0x2C72, 0x2C72),
        (0x2C75, 0x2C75),
        (0x2C7E, 0x2C80),
        (0x2C82, 0x2C82),
        (0x2C84, 0x2C84),
        (0x2C86, 0x2C86),
        (0x2C88, 0x2C88),
        (0x2C8A, 0x2C8A),
        (0x2C8C, 0x2C8C),
        (0x2C8E, 0x2C8E),
        (0x2C90, 0x2C90),
        (0x2C92, 0x2C92),
        (0x2C94, 0x2C94),
        (0x2C96, 0x2C96),
        (0x2C98, 0x2C98),
        (0x2C9A, 0x2C9A),
        (0x2C9C, 0x2C9C),
        (0x2C9E, 0x2C9E),
        (0x2CA0, 0x2CA0),
        (0x2CA2, 0x2CA2),
        (0x2CA4, 0x2CA4),
        (0x2CA6, 0x2CA6),
        (0x2CA8, 0x2CA8),
        (0x2CAA, 0x2CAA),
        (0x2CAC, 0x2CAC),
        (0x2CAE, 0x2CAE),
        (0x2CB0, 0x2CB0),
        (0x2CB2, 0x2CB2),
        (0x2CB4, 0x2CB4),
        (0x2CB6, 0x2CB6),
        (0x2CB8, 0x2CB8),
        (0x2CBA, 0x2CBA),
        (0x2CBC, 0x2CBC),
        (0x2CBE, 0x2CBE),
        (0x2CC0, 0x2CC0),
        (0x2CC2, 0x2CC2),
        (0x2CC4, 0x2CC4),
        (0x2CC6, 0x2CC6),
        (0x2CC8, 0x2CC8),
        (0x2CCA, 0x2CCA),
        (0x2CCC, 0x2CCC),
        (0x2CCE, 0x2CCE),
        (0x2CD0, 0x2CD0),
        (0x2CD2, 0x2CD2),
        (0x2CD4, 0x2CD4),
        (0x2CD6, 0x2CD6),
        (0x2CD8, 0x2CD8),
        (0x2CDA, 0x2CDA),
        (0x2CDC, 0x2CDC),
        (0x2CDE, 0x2CDE),
        (0x2CE0, 0x2CE0),
        (0x2CE2, 0x2CE2),
        (0x2CEB, 0x2CEB),
        (0x2CED, 0x2CED),
        (0x2CF2, 0x2CF2),
        (0xA640, 0xA640),
        (0xA642, 0xA642),
        (0xA644, 0xA644),
        (0xA646, 0xA646),
        (0xA648, 0xA648),
        (0xA64A, 0xA64A),
        (0xA64C, 0xA64C),
        (0xA64E, 0xA64E),
        (0xA650, 0xA650),
        (0xA652, 0xA652),
        (0xA654, 0xA654),
        (0xA656, 0xA656),
        (0xA658, 0xA658),
        (0xA65A, 0xA65A),
        (0xA65C, 0xA65C),
        (0xA65E, 0xA65E),
        (0xA660, 0xA660),
        (0xA662, 0xA662),
        (0xA664, 0xA664),
        (0xA666, 0xA666),
        (0xA668, 0xA668),
        (0xA66A, 0xA66A),
        (0xA66C, 0xA66C),
        (0xA680, 0xA680),
        (0xA682, 0xA682),
        (0xA684, 0xA684),
        (0xA686, 0xA686),
        (0xA688, 0xA688),
        (0xA68A, 0xA68A),
        (0xA68C, 0xA68C),
        (0xA68E, 0xA68E),
        (0xA690, 0xA690),
        (0xA692, 0xA692),
        (0xA694, 0xA694),
        (0xA696, 0xA696),
        (0xA698, 0xA698),
        (0xA69A, 0xA69A),
        (0xA722, 0xA722),
        (0xA724, 0xA724),
        (0xA726, 0xA726),
        (0xA728, 0xA728),
        (0xA72A, 0xA72A),
        (0xA72C, 0xA72C),
        (0xA72E, 0xA72E),
        (0xA732, 0xA732),
        (0xA734, 0xA734),
        (0xA736, 0xA736),
        (0xA738, 0xA738),
        (0xA73A, 0xA73A),
        (0xA73C, 0xA73C),
        (0xA73E, 0xA73E),
        (0xA740, 0xA740),
        (0xA742, 0xA742),
        (0xA744, 0xA744),
        (0xA746, 0xA746),
        (0xA748, 0xA748),
        (0xA74A, 0xA74A),
        (0xA74C, 0xA74C),
        (0xA74E, 0xA74E),
        (0xA750, 0xA750),
        (0xA752, 0xA752),
        (0xA754, 0xA754),
        (0xA756, 0xA756),
        (0xA758, 0xA758),
        (0xA75A, 0xA75A),
        (0xA75C, 0xA75C),
        (0xA75E, 0xA75E),
        (0xA760, 0xA760),
        (0xA762, 0xA762),
        (0xA764, 0xA764),
        (0xA766, 0xA766),
        (0xA768, 0xA768),
        (0xA76A, 0xA76A),
        (0xA76C, 0xA76C),
        (0xA76E, 0xA76E),
        (0xA779, 0xA779),
        (0xA77B, 0xA77B),
        (0xA77D, 0xA77E),
        (0xA780, 0xA780),
        (0xA782, 0xA782),
        (0xA784, 0xA784),
        (0xA786, 0xA786),
        (0xA78B, 0xA78B),
        (0xA78D, 0xA78D),
        (0xA790, 0xA790),
        (0xA792, 0xA792),
        (0xA796, 0xA796),
        (0xA798, 0xA798),
        (0xA79A, 0xA79A),
        (0xA79C, 0xA79C),
        (0xA79E, 0xA79E),
        (0xA7A0, 0xA7A0),
        (0xA7A2, 0xA7A2),
        (0xA7A4, 0xA7A4),
        (0xA7A6, 0xA7A6),
        (0xA7A8, 0xA7A8),
        (0xA7AA, 0xA7AE),
        (0xA7B0, 0xA7B4),
        (0xA7B6, 0xA7B6),
        (0xA7B8, 0xA7B8),
        (0xA7BA, 0xA7BA),
        (0xA7BC, 0xA7BC),
        (0xA7BE, 0xA7BE),
        (0xA7C0, 0xA7C0),
        (0xA7C2, 0xA7C2),
        (0xA7C4, 0xA7C7),
        (0xA7C9, 0xA7C9),
        (0xA7D0, 0xA7D0),
        (0xA7D6, 0xA7D6),
        (0xA7D8, 0xA7D8),
        (0xA7F5, 0xA7F5),
        (0xFF21, 0xFF3A),
        (0x10400, 0x10427),
        (0x104B0, 0x104D3),
        (0x10570, 0x1057A),
        (0x1057C, 0x1058A),
        (0x1058C, 0x10592),
        (0x10594, 0x10595),
        (0x10C80, 0x10CB2),
        (0x118A0, 0x118BF),
        (0x16E40, 0x16E5F),
        (0x1D400, 0x1D419),
        (0x1D434, 0x1D44D),
        (0x1D468, 0x1D481),
        (0x1D49C, 0x1D49C),
        (0x1D49E, 0x1D49F),
        (0x1D4A2, 0x1D4A2),
        (0x1D4A5, 0x1D4A6),
        (0x1D4A9, 0x1D4AC),
        (0x1D4AE, 0x1D4B5),
        (0x1D4D0, 0x1D4E9),
        (0x1D504, 0x1D505),
        (0x1D507, 0x1D50A),
        (0x1D50D, 0x1D514),
        (0x1D516, 0x1D51C),
        (0x1D538, 0x1D539),
        (0x1D53B, 0x1D53E),
        (0x1D540, 0x1D544),
        (0x1D546, 0x1D546),
        (0x1D54A, 0x1D550),
        (0x1D56C, 0x1D585),
        (0x1D5A0, 0x1D5B9),
        (0x1D5D4, 0x1D5ED),
        (0x1D608, 0x1D621),
        (0x1D63C, 0x1D655),
        (0x1D670, 0x1D689),
        (0x1D6A8, 0x1D6C0),
        (0x1D6E2, 0x1D6FA),
        (0x1D71C, 0x1D734),
        (0x1D756, 0x1D76E),
        (0x1D790, 0x1D7A8),
        (0x1D7CA, 0x1D7CA),
        (0x1E900, 0x1E921),
        (0x1F130, 0x1F149),
        (0x1F150, 0x1F169),
        (0x1F170, 0x1F189),
    ];

    pub(crate) const WHITE_SPACE: &[(u32, u32)] = &[
        (0x0009, 0x000D),
        (0x0020, 0x0020),
        (0x0085, 0x0085),
        (0x00A0, 0x00A0),
        (0x1680, 0x1680),
        (0x2000, 0x200A),
        (0x2028, 0x2029),
        (0x202F, 0x202F),
        (0x205F, 0x205F),
        (0x3000, 0x3000),
    ];
}

pub(crate) mod normalization {
    pub(crate) const CANONICAL_DECOMPOSITION: &[(u32, &[u32])] = &[
        (0x00C0, &[0x0041, 0x0300]),
        (0x00C1, &[0x0041, 0x0301]),
        (0x00C2, &[0x0041, 0x0302]),
        (0x00C3, &[0x0041, 0x0303]),
        (0x00C4, &[0x0041, 0x0308]),
        (0x00C5, &[0x0041, 0x030A]),
        (0x00C7, &[0x0043, 0x0327]),
        (0x00C8, &[0x0045, 0x0300]),
        (0x00C9, &[0x0045, 0x0301]),
        (0x00CA, &[0x0045, 0x0302]),
        (0x00CB, &[0x0045, 0x0308]),
        (0x00CC, &[0x0049, 0x0300]),
        (0x00CD, &[0x0049, 0x0301]),
        (0x00CE, &[0x0049, 0x0302]),
        (0x00CF, &[0x0049, 0x0308]),
        (0x00D1, &[0x004E, 0x0303]),
        (0x00D2, &[0x004F, 0x0300]),
        (0x00D3, &[0x004F, 0x0301]),
        (0x00D4, &[0x004F, 0x0302]),
        (0x00D5, &[0x004F, 0x0303]),
        (0x00D6, &[0x004F, 0x0308]),
        (0x00D9, &[0x0055, 0x0300]),
        (0x00DA, &[0x0055, 0x0301]),
        (0x00DB, &[0x0055, 0x0302]),
        (0x00DC, &[0x0055, 0x0308]),
        (0x00DD, &[0x0059, 0x0301]),
        (0x00E0, &[0x0061, 0x0300]),
        (0x00E1, &[0x0061, 0x0301]),
        (0x00E2, &[0x0061, 0x0302]),
        (0x00E3, &[0x0061, 0x0303]),
        (0x00E4, &[0x0061, 0x0308]),
        (0x00E5, &[0x0061, 0x030A]),
        (0x00E7, &[0x0063, 0x0327]),
        (0x00E8, &[0x0065, 0x0300]),
        (0x00E9, &[0x0065, 0x0301]),
        (0x00EA, &[0x0065, 0x0302]),
        (0x00EB, &[0x0065, 0x0308]),
        (0x00EC, &[0x0069, 0x0300]),
        (0x00ED, &[0x0069, 0x0301]),
        (0x00EE, &[0x0069, 0x0302]),
        (0x00EF, &[0x0069, 0x0308]),
        (0x00F1, &[0x006E, 0x0303]),
        (0x00F2, &[0x006F, 0x0300]),
        (0x00F3, &[0x006F, 0x0301]),
        (0x00F4, &[0x006F, 0x0302]),
        (0x00F5, &[0x006F, 0x0303]),
        (0x00F6, &[0x006F, 0x0308]),
        (0x00F9, &[0x0075, 0x0300]),
        (0x00FA, &[0x0075, 0x0301]),
        (0x00FB, &[0x0075, 0x0302]),
        (0x00FC, &[0x0075, 0x0308]),
        (0x00FD, &[0x0079, 0x0301]),
        (0x00FF, &[0x0079, 0x0308]),
        (0x0100, &[0x0041, 0x0304]),
        (0x0101, &[0x0061, 0x0304]),
        (0x0102, &[0x0041, 0x0306]),
        (0x0103, &[0x0061, 0x0306]),
        (0x0104, &[0x0041, 0x0328]),
        (0x0105, &[0x0061, 0x0328]),
        (0x0106, &[0x0043, 0x0301]),
        (0x0107, &[0x0063, 0x0301]),
        (0x0108, &[0x0043, 0x0302]),
        (0x0109, &[0x0063, 0x0302]),
        (0x010A, &[0x0043, 0x0307]),
        (0x010B, &[0x0063, 0x0307]),
        (0x010C, &[0x0043, 0x030C]),
        (0x010D, &[0x0063, 0x030C]),
        (0x010E, &[0x0044, 0x030C]),
        (0x010F, &[0x0064, 0x030C]),
        (0x0112, &[0x0045, 0x0304]),
        (0x0113, &[0x0065, 0x0304]),
        (0x0114, &[0x0045, 0x0306]),
        (0x0115, &[0x0065, 0x0306]),
        (0x0116, &[0x0045, 0x0307]),
        (0x0117, &[0x0065, 0x0307]),
        (0x0118, &[0x0045, 0x0328]),
        (0x0119, &[0x0065, 0x0328]),
        (0x011A, &[0x0045, 0x030C]),
        (0x011B, &[0x0065, 0x030C]),
        (0x011C, &[0x0047, 0x0302]),
        (0x011D, &[0x0067, 0x0302]),
        (0x011E, &[0x0047, 0x0306]),
        (0x011F, &[0x0067, 0x0306]),
        (0x0120, &[0x0047, 0x0307]),
        (0x0121, &[0x0067, 0x0307]),
        (0x0122, &[0x0047, 0x0327]),
        (0x0123, &[0x0067, 0x0327]),
        (0x0124, &[0x0048, 0x0302]),
        (0x0125, &[0x0068, 0x0302]),
        (0x0128, &[0x0049, 0x0303]),
        (0x0129, &[0x0069, 0x0303]),
        (0x012A, &[0x0049, 0x0304]),
        (0x012B, &[0x0069, 0x0304]),
        (0x012C, &[0x0049, 0x0306]),
        (0x012D, &[0x0069, 0x0306]),
        (0x012E, &[0x0049, 0x0328]),
        (0x012F, &[0x0069, 0x0328]),
        (0x0130, &[0x0049, 0x0307]),
        (0x0134, &[0x004A, 0x0302]),
        (0x0135, &[0x006A, 0x0302]),
        (0x0136, &[0x004B, 0x0327]),
        (0x0137, &[0x006B, 0x0327]),
        (0x0139, &[0x004C, 0x0301]),
        (0x013A, &[0x006C, 0x0301]),
        (0x013B, &[0x004C, 0x0327]),
        (0x013C, &[0x006C, 0x0327]),
        (0x013D, &[0x004C, 0x030C]),
        (0x013E, &[0x006C, 0x030C]),
        (0x0143, &[0x004E, 0x0301]),
        (0x0144, &[0x006E, 0x0301]),
        (0x0145, &[0x004E, 0x0327]),
        (0x0146, &[0x006E, 0x0327]),
        (0x0147, &[0x004E, 0x030C]),
        (0x0148, &[0x006E, 0x030C]),
        (0x014C, &[0x004F, 0x0304]),
        (0x014D, &[0x006F, 0x0304]),
        (0x014E, &[0x004F, 0x0306]),
        (0x014F, &[0x006F, 0x0306]),
        (0x0150, &[0x004F, 0x030B]),
        (0x0151, &[0x006F, 0x030B]),
        (0x0154, &[0x0052, 0x0301]),
        (0x0155, &[0x0072, 0x0301]),
        (0x0156, &[0x0052, 0x0327]),
        (0x0157, &[0x0072, 0x0327]),
        (0x0158, &[0x0052, 0x030C]),
        (0x0159, &[0x0072, 0x030C]),
        (0x015A, &[0x0053, 0x0301]),
        (0x015B, &[0x0073, 0x0301]),
        (0x015C, &[0x0053, 0x0302]),
        (0x015D, &[0x0073, 0x0302]),
        (0x015E, &[0x0053, 0x0327]),
        (0x015F, &[0x0073, 0x0327]),
        (0x0160, &[0x0053, 0x030C]),
        (0x0161, &[0x0073, 0x030C]),
        (0x0162, &[0x0054, 0x0327]),
        (0x0163, &[0x0074, 0x0327]),
        (0x0164, &[0x0054, 0x030C]),
        (0x0165, &[0x0074, 0x030C]),
        (0x0168, &[0x0055, 0x0303]),
        (0x0169, &[0x0075, 0x0303]),
        (0x016A, &[0x0055, 0x0304]),
        (0x016B, &[0x0075, 0x0304]),
        (0x016C, &[0x0055, 0x0306]),
        (0x016D, &[0x0075, 0x0306]),
        (0x016E, &[0x0055, 0x030A]),
        (0x016F, &[0x0075, 0x030A]),
        (0x0170, &[0x0055, 0x030B]),
        (0x0171, &[0x0075, 0x030B]),
        (0x0172, &[0x0055, 0x0328]),
        (0x0173, &[0x0075, 0x0328]),
        (0x0174, &[0x0057, 0x0302]),
        (0x0175, &[0x0077, 0x0302]),
        (0x0176, &[0x0059, 0x0302]),
        (0x0177, &[0x0079, 0x0302]),
        (0x0178, &[0x0059, 0x0308]),
        (0x0179, &[0x005A, 0x0301]),
        (0x017A, &[0x007A, 0x0301]),
        (0x017B, &[0x005A, 0x0307]),
        (0x017C, &[0x007A, 0x0307]),
        (0x017D, &[0x005A, 0x030C]),
        (0x017E, &[0x007A, 0x030C]),
        (0x01A0, &[0x004F, 0x031B]),
        (0x01A1, &[0x006F, 0x031B]),
        (0x01AF, &[0x0055, 0x031B]),
        (0x01B0, &[0x0075, 0x031B]),
        (0x01CD, &[0x0041, 0x030C]),
        (0x01CE, &[0x0061, 0x030C]),
        (0x01CF, &[0x0049, 0x030C]),
        (0x01D0, &[0x0069, 0x030C]),
        (0x01D1, &[0x004F, 0x030C]),
        (0x01D2, &[0x006F, 0x030C]),
        (0x01D3, &[0x0055, 0x030C]),
        (0x01D4, &[0x0075, 0x030C]),
        (0x01D5, &[0x00DC, 0x0304]),
        (0x01D6, &[0x00FC, 0x0304]),
        (0x01D7, &[0x00DC, 0x0301]),
        (0x01D8, &[0x00FC, 0x0301]),
        (0x01D9, &[0x00DC, 0x030C]),
        (0x01DA, &[0x00FC, 0x030C]),
        (0x01DB, &[0x00DC, 0x0300]),
        (0x01DC, &[0x00FC, 0x0300]),
        (0x01DE, &[0x00C4, 0x0304]),
        (0x01DF, &[0x00E4, 0x0304]),
        (0x01E0, &[0x0226, 0x0304]),
        (0x01E1, &[0x0227, 0x0304]),
        (0x01E2, &[0x00C6, 0x0304]),
        (0x01E3, &[0x00E6, 0x0304]),
        (0x01E6, &[0x0047, 0x030C]),
        (0x01E7, &[0x0067, 0x030C]),
        (0x01E8, &[0x004B, 0x030C]),
        (0x01E9, &[0x006B, 0x030C]),
        (0x01EA, &[0x004F, 0x0328]),
        (0x01EB, &[0x006F, 0x0328]),
        (0x01EC, &[0x01EA, 0x0304]),
        (0x01ED, &[0x01EB, 0x0304]),
        (0x01EE, &[0x01B7, 0x030C]),
        (0x01EF, &[0x0292, 0x030C]),
        (0x01F0, &[0x006A, 0x030C]),
        (0x01F4, &[0x0047, 0x0301]),
        (0x01F5, &[0x0067, 0x0301]),
        (0x01F8, &[0x004E, 0x0300]),
        (0x01F9, &[0x006E, 0x0300]),
        (0x01FA, &[0x00C5, 0x0301]),
        (0x01FB, &[0x00E5, 0x0301]),
        (0x01FC, &[0x00C6, 0x0301]),
        (0x01FD, &[0x00E6, 0x0301]),
        (0x01FE, &[0x00D8, 0x0301]),
        (0x01FF, &[0x00F8, 0x0301]),
        (0x0200, &[0x0041, 0x030F]),
        (0x0201, &[0x0061, 0x030F]),
        (0x0202, &[0x0041, 0x0311]),
        (0x0203, &[0x0061, 0x0311]),
        (0x0204, &[0x0045, 0x030F]),
        (0x0205, &[0x0065, 0x030F]),
        (0x0206, &[0x0045, 0x0311]),
        (0x0207, &[0x0065, 0x0311]),
        (0x0208, &[0x0049, 0x030F]),
        (0x0209, &[0x0069, 0x030F]),
        (0x020A, &[0x0049, 0x0311]),
        (0x020B, &[0x0069, 0x0311]),
        (0x020C, &[0x004F, 0x030F]),
        (0x020D, &[0x006F, 0x030F]),
        (0x020E, &[0x004F, 0x0311]),
        (0x020F, &[0x006F, 0x0311]),
        (0x0210, &[0x0052, 0x030F]),
        (0x0211, &[0x0072, 0x030F]),
        (0x0212, &[0x0052, 0x0311]),
        (0x0213, &[0x0072, 0x0311]),
        (0x0214, &[0x0055, 0x030F]),
        (0x0215, &[0x0075, 0x030F]),
        (0x0216, &[0x0055, 0x0311]),
        (0x0217, &[0x0075, 0x0311]),
        (0x0218, &[0x0053, 0x0326]),
        (0x0219, &[0x0073, 0x0326]),
        (0x021A, &[0x0054, 0x0326]),
        (0x021B, &[0x0074, 0x0326]),
        (0x021E, &[0x0048, 0x030C]),
        (0x021F, &[0x0068, 0x030C]),
        (0x0226, &[0x0041, 0x0307]),
        (0x0227, &[0x0061, 0x0307]),
        (0x0228, &[0x0045, 0x0327]),
        (0x0229, &[0x0065, 0x0327]),
        (0x022A, &[0x00D6, 0x0304]),
        (0x022B, &[0x00F6, 0x0304]),
        (0x022C, &[0x00D5, 0x0304]),
        (0x022D, &[0x00F5, 0x0304]),
        (0x022E, &[0x004F, 0x0307]),
        (0x022F, &[0x006F, 0x0307]),
        (0x0230, &[0x022E, 0x0304]),
        (0x0231, &[0x022F, 0x0304]),
        (0x0232, &[0x0059, 0x0304]),
        (0x0233, &[0x0079, 0x0304]),
        (0x0340, &[0x0300]),
        (0x0341, &[0x0301]),
        (0x0343, &[0x0313]),
        (0x0344, &[0x0308, 0x0301]),
        (0x0374, &[0x02B9]),
        (0x037E, &[0x003B]),
        (0x0385, &[0x00A8, 0x0301]),
        (0x0386, &[0x0391, 0x0301]),
        (0x0387, &[0x00B7]),
        (0x0388, &[0x0395, 0x0301]),
        (0x0389, &[0x0397, 0x0301]),
        (0x038A, &[0x0399, 0x0301]),
        (0x038C, &[0x039F, 0x0301]),
        (0x038E, &[0x03A5, 0x0301]),
        (0x038F, &[0x03A9, 0x0301]),
        (0x0390, &[0x03CA, 0x0301]),
        (0x03AA, &[0x0399, 0x0308]),
        (0x03AB, &[0x03A5, 0x0308]),
        (0x03AC, &[0x03B1, 0x0301]),
        (0x03AD, &[0x03B5, 0x0301]),
        (0x03AE, &[0x03B7, 0x0301]),
        (0x03AF, &[0x03B9, 0x0301]),
        (0x03B0, &[0x03CB, 0x0301]),
        (0x03CA, &[0x03B9, 0x0308]),
        (0x03CB, &[0x03C5, 0x0308]),
        (0x03CC, &[0x03BF, 0x0301]),
        (0x03CD, &[0x03C5, 0x0301]),
        (0x03CE, &[0x03C9, 0x0301]),
        (0x03D3, &[0x03D2, 0x0301]),
        (0x03D4, &[0x03D2, 0x0308]),
        (0x0400, &[0x0415, 0x0300]),
        (0x0401, &[0x0415, 0x0308]),
        (0x0403, &[0x0413, 0x0301]),
        (0x0407, &[0x0406, 0x0308]),
        (0x040C, &[0x041A, 0x0301]),
        (0x040D, &[0x0418, 0x0300]),
        (0x040E, &[0x0423, 0x0306]),
        (0x0419, &[0x0418, 0x0306]),
        (0x0439, &[0x0438, 0x0306]),
        (0x0450, &[0x0435, 0x0300]),
        (0x0451, &[0x0435, 0x0308]),
        (0x0453, &[0x0433, 0x0301]),
        (0x0457, &[0x0456, 0x0308]),
        (0x045C, &[0x043A, 0x0301]),
        (0x045D, &[0x0438, 0x0300]),
        (0x045E, &[0x0443, 0x0306]),
        (0x0476, &[0x0474, 0x030F]),
        (0x0477, &[0x0475, 0x030F]),
        (0x04C1, &[0x0416, 0x0306]),
        (0x04C2, &[0x0436, 0x0306]),
        (0x04D0, &[0x0410, 0x0306]),
        (0x04D1, &[0x0430, 0x0306]),
        (0x04D2, &[0x0410, 0x0308]),
        (0x04D3, &[0x0430, 0x0308]),
        (0x04D6, &[0x0415, 0x0306]),
        (0x04D7, &[0x0435, 0x0306]),
        (0x04DA, &[0x04D8, 0x0308]),
        (0x04DB, &[0x04D9, 0x0308]),
        (0x04DC, &[0x0416, 0x0308]),
        (0x04DD, &[0x0436, 0x0308]),
        (0x04DE, &[0x0417, 0x0308]),
        (0x04DF, &[0x0437, 0x0308]),
        (0x04E2, &[0x0418, 0x0304]),
        (0x04E3, &[0x0438, 0x0304]),
        (0x04E4, &[0x0418, 0x0308]),
        (0x04E5, &[0x0438, 0x0308]),
        (0x04E6, &[0x041E, 0x0308]),
        (0x04E7, &[0x043E, 0x0308]),
        (0x04EA, &[0x04E8, 0x0308]),
        (0x04EB, &[0x04E9, 0x0308]),
        (0x04EC, &[0x042D, 0x0308]),
        (0x04ED, &[0x044D, 0x0308]),
        (0x04EE, &[0x0423, 0x0304]),
        (0x04EF, &[0x0443, 0x0304]),
        (0x04F0, &[0x0423, 0x0308]),
        (0x04F1, &[0x0443, 0x0308]),
        (0x04F2, &[0x0423, 0x030B]),
        (0x04F3, &[0x0443, 0x030B]),
        (0x04F4, &[0x0427, 0x0308]),
        (0x04F5, &[0x0447, 0x0308]),
        (0x04F8, &[0x042B, 0x0308]),
        (0x04F9, &[0x044B, 0x0308]),
        (0x0622, &[0x0627, 0x0653]),
        (0x0623, &[0x0627, 0x0654]),
        (0x0624, &[0x0648, 0x0654]),
        (0x0625, &[0x0627, 0x0655]),
        (0x0626, &[0x064A, 0x0654]),
        (0x06C0, &[0x06D5, 0x0654]),
        (0x06C2, &[0x06C1, 0x0654]),
        (0x06D3, &[0x06D2, 0x0654]),
        (0x0929, &[0x0928, 0x093C]),
        (0x0931, &[0x0930, 0x093C]),
        (0x0934, &[0x0933, 0x093C]),
        (0x0958, &[0x0915, 0x093C]),
        (0x0959, &[0x0916, 0x093C]),
        (0x095A, &[0x0917, 0x093C]),
        (0x095B, &[0x091C, 0x093C]),
        (0x095C, &[0x0921, 0x093C]),
        (0x095D, &[0x0922, 0x093C]),
        (0x095E, &[0x092B, 0x093C]),
        (0x095F, &[0x092F, 0x093C]),
        (0x09CB, &[0x09C7, 0x09BE]),
        (0x09CC, &[0x09C7, 0x09D7]),
        (0x09DC, &[0x09A1, 0x09BC]),
        (0x09DD, &[0x09A2, 0x09BC]),
        (0x09DF, &[0x09AF, 0x09BC]),
        (0x0A33, &[0x0A32, 0x0A3C]),
        (0x0A36, &[0x0A38, 0x0A3C]),
        (0x0A59, &[0x0A16, 0x0A3C]),
        (0x0A5A, &[0x0A17, 0x0A3C]),
        (0x0A5B, &[0x0A1C, 0x0A3C]),
        (0x0A5E, &[0x0A2B, 0x0A3C]),
        (0x0B48, &[0x0B47, 0x0B56]),
        (0x0B4B, &[0x0B47, 0x0B3E]),
        (0x0B4C, &[0x0B47, 0x0B57]),
        (0x0B5C, &[0x0B21, 0x0B3C]),
        (0x0B5D, &[0x0B22, 0x0B3C]),
        (0x0B94, &[0x0B92, 0x0BD7]),
        (0x0BCA, &[0x0BC6, 0x0BBE]),
        (0x0BCB, &[0x0BC7, 0x0BBE]),
        (0x0BCC, &[0x0BC6, 0x0BD7]),
        (0x0C48, &[0x0C46, 0x0C56]),
        (0x0CC0, &[0x0CBF, 0x0CD5]),
        (0x0CC7, &[0x0CC6, 0x0CD5]),
        (0x0CC8, &[0x0CC6, 0x0CD6]),
        (0x0CCA, &[0x0CC6, 0x0CC2]),
        (0x0CCB, &[0x0CCA, 0x0CD5]),
        (0x0D4A, &[0x0D46, 0x0D3E]),
        (0x0D4B, &[0x0D47, 0x0D3E]),
        (0x0D4C, &[0x0D46, 0x0D57]),
        (0x0DDA, &[0x0DD9, 0x0DCA]),
        (0x0DDC, &[0x0DD9, 0x0DCF]),
        (0x0DDD, &[0x0DDC, 0x0DCA]),
        (0x0DDE, &[0x0DD9, 0x0DDF]),
        (0x0F43, &[0x0F42, 0x0FB7]),
        (0x0F4D, &[0x0F4C, 0x0FB7]),
        (0x0F52, &[0x0F51, 0x0FB7]),
        (0x0F57, &[0x0F56, 0x0FB7]),
        (0x0F5C, &[0x0F5B, 0x0FB7]),
        (0x0F69, &[0x0F40, 0x0FB5]),
        (0x0F73, &[0x0F71, 0x0F72]),
        (0x0F75, &[0x0F71, 0x0F74]),
        (0x0F76, &[0x0FB2, 0x0F80]),
        (0x0F78, &[0x0FB3, 0x0F80]),
        (0x0F81, &[0x0F71, 0x0F80]),
        (0x0F93, &[0x0F92, 0x0FB7]),
        (0x0F9D, &[0x0F9C, 0x0FB7]),
        (0x0FA2, &[0x0FA1, 0x0FB7]),
        (0x0FA7, &[0x0FA6, 0x0FB7]),
        (0x0FAC, &[0x0FAB, 0x0FB7]),
        (0x0FB9, &[0x0F90, 0x0FB5]),
        (0x1026, &[0x1025, 0x102E]),
        (0x1B06, &[0x1B05, 0x1B35]),
        (0x1B08, &[0x1B07, 0x1B35]),
        (0x1B0A, &[0x1B09, 0x1B35]),
        (0x1B0C, &[0x1B0B, 0x1B35]),
        (0x1B0E, &[0x1B0D, 0x1B35]),
        (0x1B12, &[0x1B11, 0x1B35]),
        (0x1B3B, &[0x1B3A, 0x1B35]),
        (0x1B3D, &[0x1B3C, 0x1B35]),
        (0x1B40, &[0x1B3E, 0x1B35]),
        (0x1B41, &[0x1B3F, 0x1B35]),
        (0x1B43, &[0x1B42, 0x1B35]),
        (0x1E00, &[0x0041, 0x0325]),
        (0x1E01, &[0x0061, 0x0325]),
        (0x1E02, &[0x0042, 0x0307]),
        (0x1E03, &[0x0062, 0x0307]),
        (0x1E04, &[0x0042, 0x0323]),
        (0x1E05, &[0x0062, 0x0323]),
        (0x1E06, &[0x0042, 0x0331]),
        (0x1E07, &[0x0062, 0x0331]),
        (0x1E08, &[0x00C7, 0x0301]),
        (0x1E09, &[0x00E7, 0x0301]),
        (0x1E0A, &[0x0044, 0x0307]),
        (0x1E0B, &[0x0064, 0x0307]),
        (0x1E0C, &[0x0044, 0x0323]),
        (0x1E0D, &[0x0064, 0x0323]),
        (0x1E0E, &[0x0044, 0x0331]),
        (0x1E0F, &[0x0064, 0x0331]),
        (0x1E10, &[0x0044, 0x0327]),
        (0x1E11, &[0x0064, 0x0327]),
        (0x1E12, &[0x0044, 0x032D]),
        (0x1E13, &[0x0064, 0x032D]),
        (0x1E14, &[0x0112, 0x0300]),
        (0x1E15, &[0x0113, 0x0300]),
        (0x1E16, &[0x0112, 0x0301]),
        (0x1E17, &[0x0113, 0x0301]),
        (0x1E18, &[0x0045, 0x032D]),
        (0x1E19, &[0x0065, 0x032D]),
        (0x1E1A, &[0x0045, 0x0330]),
        (0x1E1B, &[0x0065, 0x0330]),
        (0x1E1C, &[0x0228, 0x0306]),
        (0x1E1D, &[0x0229, 0x0306]),
        (0x1E1E, &[0x0046, 0x0307]),
        (0x1E1F, &[0x0066, 0x0307]),
        (0x1E20, &[0x0047, 0x0304]),
        (0x1E21, &[0x0067, 0x0304]),
        (0x1E22, &[0x0048, 0x0307]),
        (0x1E23, &[0x0068, 0x0307]),
        (0x1E24, &[0x0048, 0x0323]),
        (0x1E25, &[0x0068, 0x0323]),
        (0x1E26, &[0x0048, 0x0308]),
        (0x1E27, &[0x0068, 0x0308]),
        (0x1E28, &[0x0048, 0x0327]),
        (0x1E29, &[0x0068, 0x0327]),
        (0x1E2A, &[0x0048, 0x032E]),
        (0x1E2B, &[0x0068, 0x032E]),
        (0x1E2C, &[0x0049, 0x0330]),
        (0x1E2D, &[0x0069, 0x0330]),
        (0x1E2E, &[0x00CF, 0x0301]),
        (0x1E2F, &[0x00EF, 0x0301]),
        (0x1E30, &[0x004B, 0x0301]),
        (0x1E31, &[0x006B, 0x0301]),
        (0x1E32, &[0x004B, 0x0323]),
        (0x1E33, &[0x006B, 0x0323]),
        (0x1E34, &[0x004B, 0x0331]),
        (0x1E35, &[0x006B, 0x0331]),
        (0x1E36, &[0x004C, 0x0323]),
        (0x1E37, &[0x006C, 0x0323]),
        (0x1E38, &[0x1E36, 0x0304]),
        (0x1E39, &[0x1E37, 0x0304]),
        (0x1E3A, &[0x004C, 0x0331]),
        (0x1E3B, &[0x006C, 0x0331]),
        (0x1E3C, &[0x004C, 0x032D]),
        (0x1E3D, &[0x006C, 0x032D]),
        (0x1E3E, &[0x004D, 0x0301]),
        (0x1E3F, &[0x006D, 0x0301]),
        (0x1E40, &[0x004D, 0x0307]),
        (0x1E41, &[0x006D, 0x0307]),
        (0x1E42, &[0x004D, 0x0323]),
        (0x1E43, &[0x006D, 0x0323]),
        (0x1E44, &[0x004E, 0x0307]),
        (0x1E45, &[0x006E, 0x0307]),
        (0x1E46, &[0x004E, 0x0323]),
        (0x1E47, &[0x006E, 0x0323]),
        (0x1E48, &[0x004E, 0x0331]),
        (0x1E49, &[0x006E, 0x0331]),
        (0x1E4A, &[0x004E, 0x032D]),
        (0x1E4B, &[0x006E, 0x032D]),
        (0x1E4C, &[0x00D5, 0x0301]),
        (0x1E4D, &[0x00F5, 0x0301]),
        (0x1E4E, &[0x00D5, 0x0308]),
        (0x1E4F, &[0x00F5, 0x0308]),
        (0x1E50, &[0x014C, 0x0300]),
        (0x1E51, &[0x014D, 0x0300]),
        (0x1E52, &[0x014C, 0x0301]),
        (0x1E53, &[0x014D, 0x0301]),
        (0x1E54, &[0x0050, 0x0301]),
        (0x1E55, &[0x0070, 0x0301]),
        (0x1E56, &[0x0050, 0x0307]),
        (0x1E57, &[0x0070, 0x0307]),
        (0x1E58, &[0x0052, 0x0307]),
        (0x1E59, &[0x0072, 0x0307]),
        (0x1E5A, &[0x0052, 0x0323]),
        (0x1E5B, &[0x0072, 0x0323]),
        (0x1E5C, &[0x1E5A, 0x0304]),
        (0x1E5D, &[0x1E5B, 0x0304]),
        (0x1E5E, &[0x0052, 0x0331]),
        (0x1E5F, &[0x0072, 0x0331]),
        (0x1E60, &[0x0053, 0x0307]),
        (0x1E61, &[0x0073, 0x0307]),
        (0x1E62, &[0x0053, 0x0323]),
        (0x1E63, &[0x0073, 0x0323]),
        (0x1E64, &[0x015A, 0x0307]),
        (0x1E65, &[0x015B, 0x0307]),
        (0x1E66, &[0x0160, 0x0307]),
        (0x1E67, &[0x0161, 0x0307]),
        (0x1E68, &[0x1E62, 0x0307]),
        (0x1E69, &[0x1E63, 0x0307]),
        (0x1E6A, &[0x0054, 0x0307]),
        (0x1E6B, &[0x0074, 0x0307]),
        (0x1E6C, &[0x0054, 0x0323]),
        (0x1E6D, &[0x0074, 0x0323]),
        (0x1E6E, &[0x0054, 0x0331]),
        (0x1E6F, &[0x0074, 0x0331]),
        (0x1E70, &[0x0054, 0x032D]),
        (0x1E71, &[0x0074, 0x032D]),
        (0x1E72, &[0x0055, 0x0324]),
        (0x1E73, &[0x0075, 0x0324]),
        (0x1E74, &[0x0055, 0x0330]),
        (0x1E75, &[0x0075, 0x0330]),
        (0x1E76, &[0x0055, 0x032D]),
        (0x1E77, &[0x0075, 0x032D]),
        (0x1E78, &[0x0168, 0x0301]),
        (0x1E79, &[0x0169, 0x0301]),
        (0x1E7A, &[0x016A, 0x0308]),
        (0x1E7B, &[0x016B, 0x0308]),
        (0x1E7C, &[0x0056, 0x0303]),
        (0x1E7D, &[0x0076, 0x0303]),
        (0x1E7E, &[0x0056, 0x0323]),
        (0x1E7F, &[0x0076, 0x0323]),
        (0x1E80, &[0x0057, 0x0300]),
        (0x1E81, &[0x0077, 0x0300]),
        (0x1E82, &[0x0057, 0x0301]),
        (0x1E83, &[0x0077, 0x0301]),
        (0x1E84, &[0x0057, 0x0308]),
        (0x1E85, &[0x0077, 0x0308]),
        (0x1E86, &[0x0057, 0x0307]),
        (0x1E87, &[0x0077, 0x0307]),
        (0x1E88, &[0x0057, 0x0323]),
        (0x1E89, &[0x0077, 0x0323]),
        (0x1E8A, &[0x0058, 0x0307]),
        (0x1E8B, &[0x0078, 0x0307]),
        (0x1E8C, &[0x0058, 0x0308]),
        (0x1E8D, &[0x0078, 0x0308]),
        (0x1E8E, &[0x0059, 0x0307]),
        (0x1E8F, &[0x0079, 0x0307]),
        (0x1E90, &[0x005A, 0x0302]),
        (0x1E91, &[0x007A, 0x0302]),
        (0x1E92, &[0x005A, 0x0323]),
        (0x1E93, &[0x007A, 0x0323]),
        (0x1E94, &[0x005A, 0x0331]),
        (0x1E95, &[0x007A, 0x0331]),
        (0x1E96, &[0x0068, 0x0331]),
        (0x1E97, &[0x0074, 0x0308]),
        (0x1E98, &[0x0077, 0x030A]),
        (0x1E99, &[0x0079, 0x030A]),
        (0x1E9B, &[0x017F, 0x0307]),
        (0x1EA0, &[0x0041, 0x0323]),
        (0x1EA1, &[0x0061, 0x0323]),
        (0x1EA2, &[0x0041, 0x0309]),
        (0x1EA3, &[0x0061, 0x0309]),
        (0x1EA4, &[0x00C2, 0x0301]),
        (0x1EA5, &[0x00E2, 0x0301]),
        (0x1EA6, &[0x00C2, 0x0300]),
        (0x1EA7, &[0x00E2, 0x0300]),
        (0x1EA8, &[0x00C2, 0x0309]),
        (0x1EA9, &[0x00E2, 0x0309]),
        (0x1EAA, &[0x00C2, 0x0303]),
        (0x1EAB, &[0x00E2, 0x0303]),
        (0x1EAC, &[0x1EA0, 0x0302]),
        (0x1EAD, &[0x1EA1, 0x0302]),
        (0x1EAE, &[0x0102, 0x0301]),
        (0x1EAF, &[0x0103, 0x0301]),
        (0x1EB0, &[0x0102, 0x0300]),
        (0x1EB1, &[0x0103, 0x0300]),
        (0x1EB2, &[0x0102, 0x0309]),
        (0x1EB3, &[0x0103, 0x0309]),
        (0x1EB4, &[0x0102, 0x0303]),
        (0x1EB5, &[0x0103, 0x0303]),
        (0x1EB6, &[0x1EA0, 0x0306]),
        (0x1EB7, &[0x1EA1, 0x0306]),
        (0x1EB8, &[0x0045, 0x0323]),
        (0x1EB9, &[0x0065, 0x0323]),
        (0x1EBA, &[0x0045, 0x0309]),
        (0x1EBB, &[0x0065, 0x0309]),
        (0x1EBC, &[0x0045, 0x0303]),
        (0x1EBD, &[0x0065, 0x0303]),
        (0x1EBE, &[0x00CA, 0x0301]),
        (0x1EBF, &[0x00EA, 0x0301]),
        (0x1EC0, &[0x00CA, 0x0300]),
        (0x1EC1, &[0x00EA, 0x0300]),
        (0x1EC2, &[0x00CA, 0x0309]),
        (0x1EC3, &[0x00EA, 0x0309]),
        (0x1EC4, &[0x00CA, 0x0303]),
        (0x1EC5, &[0x00EA, 0x0303]),
        (0x1EC6, &[0x1EB8, 0x0302]),
        (0x1EC7, &[0x1EB9, 0x0302]),
        (0x1EC8, &[0x0049, 0x0309]),
        (0x1EC9, &[0x0069, 0x0309]),
        (0x1ECA, &[0x0049, 0x0323]),
        (0x1ECB, &[0x0069, 0x0323]),
        (0x1ECC, &[0x004F, 0x0323]),
        (0x1ECD, &[0x006F, 0x0323]),
        (0x1ECE, &[0x004F, 0x0309]),
        (0x1ECF, &[0x006F, 0x0309]),
        (0x1ED0, &[0x00D4, 0x0301]),
        (0x1ED1, &[0x00F4, 0x0301]),
        (0x1ED2, &[0x00D4, 0x0300]),
        (0x1ED3, &[0x00F4, 0x0300]),
        (0x1ED4, &[0x00D4, 0x0309]),
        (0x1ED5, &[0x00F4, 0x0309]),
        (0x1ED6, &[0x00D4, 0x0303]),
        (0x1ED7, &[0x00F4, 0x0303]),
        (0x1ED8, &[0x1ECC, 0x0302]),
        (0x1ED9, &[0x1ECD, 0x0302]),
        (0x1EDA, &[0x01A0, 0x0301]),
        (0x1EDB, &[0x01A1, 0x0301]),
        (0x1EDC, &[0x01A0, 0x0300]),
        (0x1EDD, &[0x01A1, 0x0300]),
        (0x1EDE, &[0x01A0, 0x0309]),
        (0x1EDF, &[0x01A1, 0x0309]),
        (0x1EE0, &[0x01A0, 0x0303]),
        (0x1EE1, &[0x01A1, 0x0303]),
        (0x1EE2, &[0x01A0, 0x0323]),
        (0x1EE3, &[0x01A1, 0x0323]),
        (0x1EE4, &[0x0055, 0x0323]),
        (0x1EE5, &[0x0075, 0x0323]),
        (0x1EE6, &[0x0055, 0x0309]),
        (0x1EE7, &[0x0075, 0x0309]),
        (0x1EE8, &[0x01AF, 0x0301]),
        (0x1EE9, &[0x01B0, 0x0301]),
        (0x1EEA, &[0x01AF, 0x0300]),
        (0x1EEB, &[0x01B0, 0x0300]),
        (0x1EEC, &[0x01AF, 0x0309]),
        (0x1EED, &[0x01B0, 0x0309]),
        (0x1EEE, &[0x01AF, 0x0303]),
        (0x1EEF, &[0x01B0, 0x0303]),
        (0x1EF0, &[0x01AF, 0x0323]),
        (0x1EF1, &[0x01B0, 0x0323]),
        (0x1EF2, &[0x0059, 0x0300]),
        (0x1EF3, &[0x0079, 0x0300]),
        (0x1EF4, &[0x0059, 0x0323]),
        (0x1EF5, &[0x0079, 0x0323]),
        (0x1EF6, &[0x0059, 0x0309]),
        (0x1EF7, &[0x0079, 0x0309]),
        (0x1EF8, &[0x0059, 0x0303]),
        (0x1EF9, &[0x0079, 0x0303]),
        (0x1F00, &[0x03B1, 0x0313]),
        (0x1F01, &[0x03B1, 0x0314]),
        (0x1F02, &[0x1F00, 0x0300]),
        (0x1F03, &[0x1F01, 0x0300]),
        (0x1F04, &[0x1F00, 0x0301]),
        (0x1F05, &[0x1F01, 0x0301]),
        (0x1F06, &[0x1F00, 0x0342]),
        (0x1F07, &[0x1F01, 0x0342]),
        (0x1F08, &[0x0391, 0x0313]),
        (0x1F09, &[0x0391, 0x0314]),
        (0x1F0A, &[0x1F08, 0x0300]),
        (0x1F0B, &[0x1F09, 0x0300]),
        (0x1F0C, &[0x1F08, 0x0301]),
        (0x1F0D, &[0x1F09, 0x0301]),
        (0x1F0E, &[0x1F08, 0x0342]),
        (0x1F0F, &[0x1F09, 0x0342]),
        (0x1F10, &[0x03B5, 0x0313]),
        (0x1F11, &[0x03B5, 0x0314]),
        (0x1F12, &[0x1F10, 0x0300]),
        (0x1F13, &[0x1F11, 0x0300]),
        (0x1F14, &[0x1F10, 0x0301]),
        (0x1F15, &[0x1F11, 0x0301]),
        (0x1F18, &[0x0395, 0x0313]),
        (0x1F19, &[0x0395, 0x0314]),
        (0x1F1A, &[0x1F18, 0x0300]),
        (0x1F1B, &[0x1F19, 0x0300]),
        (0x1F1C, &[0x1F18, 0x0301]),
        (0x1F1D, &[0x1F19, 0x0301]),
        (0x1F20, &[0x03B7, 0x0313]),
        (0x1F21, &[0x03B7, 0x0314]),
        (0x1F22, &[0x1F20, 0x0300]),
        (0x1F23, &[0x1F21, 0x0300]),
        (0x1F24, &[0x1F20, 0x0301]),
        (0x1F25, &[0x1F21, 0x0301]),
        (0x1F26, &[0x1F20, 0x0342]),
        (0x1F27, &[0x1F21, 0x0342]),
        (0x1F28, &[0x0397, 0x0313]),
        (0x1F29, &[0x0397, 0x0314]),
        (0x1F2A, &[0x1F28, 0x0300]),
        (0x1F2B, &[0x1F29, 0x0300]),
        (0x1F2C, &[0x1F28, 0x0301]),
        (0x1F2D, &[0x1F29, 0x0301]),
        (0x1F2E, &[0x1F28, 0x0342]),
        (0x1F2F, &[0x1F29, 0x0342]),
        (0x1F30, &[0x03B9, 0x0313]),
        (0x1F31, &[0x03B9, 0x0314]),
        (0x1F32, &[0x1F30, 0x0300]),
        (0x1F33, &[0x1F31, 0x0300]),
        (0x1F34, &[0x1F30, 0x0301]),
        (0x1F35, &[0x1F31, 0x0301]),
        (0x1F36, &[0x1F30, 0x0342]),
        (0x1F37, &[0x1F31, 0x0342]),
        (0x1F38, &[0x0399, 0x0313]),
        (0x1F39, &[0x0399, 0x0314]),
        (0x1F3A, &[0x1F38, 0x0300]),
        (0x1F3B, &[0x1F39, 0x0300]),
        (0x1F3C, &[0x1F38, 0x0301]),
        (0x1F3D, &[0x1F39, 0x0301]),
        (0x1F3E, &[0x1F38, 0x0342]),
        (0x1F3F, &[0x1F39, 0x0342]),
        (0x1F40, &[0x03BF, 0x0313]),
        (0x1F41, &[0x03BF, 0x0314]),
        (0x1F42, &[0x1F40, 0x0300]),
        (0x1F43, &[0x1F41, 0x0300]),
        (0x1F44, &[0x1F40, 0x0301]),
        (0x1F45, &[0x1F41, 0x0301]),
        (0x1F48, &[0x039F, 0x0313]),
        (0x1F49, &[0x039F, 0x0314]),
        (0x1F4A, &[0x1F48, 0x0300]),
        (0x1F4B, &[0x1F49, 0x0300]),
        (0x1F4C, &[0x1F48, 0x0301]),
        (0x1F4D, &[0x1F49, 0x0301]),
        (0x1F50, &[0x03C5, 0x0313]),
        (0x1F51, &[0x03C5, 0x0314]),
        (0x1F52, &[0x1F50, 0x0300]),
        (0x1F53, &[0x1F51, 0x0300]),
        (0x1F54, &[0x1F50, 0x0301]),
        (0x1F55, &[0x1F51, 0x0301]),
        (0x1F56, &[0x1F50, 0x0342]),
        (0x1F57, &[0x1F51, 0x0342]),
        (0x1F59, &[0x03A5, 0x0314]),
        (0x1F5B, &[0x1F59, 0x0300]),
        (0x1F5D, &[0x1F59, 0x0301]),
        (0x1F5F, &[0x1F59, 0x0342]),
        (0x1F60, &[0x03C9, 0x0313]),
        (0x1F61, &[0x03C9, 0x0314]),
        (0x1F62, &[0x1F60, 0x0300]),
        (0x1F63, &[0x1F61, 0x0300]),
        (0x1F64, &[0x1F60, 0x0301]),
        (0x1F65, &[0x1F61, 0x0301]),
        (0x1F66, &[0x1F60, 0x0342]),
        (0x1F67, &[0x1F61, 0x0342]),
        (0x1F68, &[0x03A9, 0x0313]),
        (0x1F69, &[0x03A9, 0x0314]),
        (0x1F6A, &[0x1F68, 0x0300]),
        (0x1F6B, &[0x1F69, 0x0300]),
        (0x1F6C, &[0x1F68, 0x0301]),
        (0x1F6D, &[0x1F69, 0x0301]),
        (0x1F6E, &[0x1F68, 0x0342]),
        (0x1F6F, &[0x1F69, 0x0342]),
        (0x1F70, &[0x03B1, 0x0300]),
        (0x1F71, &[0x03AC]),
        (0x1F72, &[0x03B5, 0x0300]),
        (0x1F73, &[0x03AD]),
        (0x1F74, &[0x03B7, 0x0300]),
        (0x1F75, &[0x03AE]),
        (0x1F76, &[0x03B9, 0x0300]),
        (0x1F77, &[0x03AF]),
        (0x1F78, &[0x03BF, 0x0300]),
        (0x1F79, &[0x03CC]),
        (0x1F7A, &[0x03C5, 0x0300]),
        (0x1F7B, &[0x03CD]),
        (0x1F7C, &[0x03C9, 0x0300]),
        (0x1F7D, &[0x03CE]),
        (0x1F80, &[0x1F00, 0x0345]),
        (0x1F81, &[0x1F01, 0x0345]),
        (0x1F82, &[0x1F02, 0x0345]),
        (0x1F83, &[0x1F03, 0x0345]),
        (0x1F84, &[0x1F04, 0x0345]),
        (0x1F85, &[0x1F05, 0x0345]),
        (0x1F86, &[0x1F06, 0x0345]),
        (0x1F87, &[0x1F07, 0x0345]),
        (0x1F88, &[0x1F08, 0x0345]),
        (0x1F89, &[0x1F09, 0x0345]),
        (0x1F8A, &[0x1F0A, 0x0345]),
        (0x1F8B, &[0x1F0B, 0x0345]),
        (0x1F8C, &[0x1F0C, 0x0345]),
        (0x1F8D, &[0x1F0D, 0x0345]),
        (0x1F8E, &[0x1F0E, 0x0345]),
        (0x1F8F, &[0x1F0F, 0x0345]),
        (0x1F90, &[0x1F20, 0x0345]),
        (0x1F91, &[0x1F21, 0x0345]),
        (0x1F92, &[0x1F22, 0x0345]),
        (0x1F93, &[0x1F23, 0x0345]),
        (0x1F94, &[0x1F24, 0x0345]),
        (0x1F95, &[0x1F25, 0x0345]),
        (0x1F96, &[0x1F26, 0x0345]),
        (0x1F97, &[0x1F27, 0x0345]),
        (0x1F98, &[0x1F28, 0x0345]),
        (0x1F99, &[0x1F29, 0x0345]),
        (0x1F9A, &[0x1F2A, 0x0345]),
        (0x1F9B, &[0x1F2B, 0x0345]),
        (0x1F9C, &[0x1F2C, 0x0345]),
        (0x1F9D, &[0x1F2D, 0x0345]),
        (0x1F9E, &[0x1F2E, 0x0345]),
        (0x1F9F, &[0x1F2F, 0x0345]),
        (0x1FA0, &[0x1F60, 0x0345]),
        (0x1FA1, &[0x1F61, 0x0345]),
        (0x1FA2, &[0x1F62, 0x0345]),
        (0x1FA3, &[0x1F63, 0x0345]),
        (0x1FA4, &[0x1F64, 0x0345]),
        (0x1FA5, &[0x1F65, 0x0345]),
        (0x1FA6, &[0x1F66, 0x0345]),
        (0x1FA7, &[0x1F67, 0x0345]),
        (0x1FA8, &[0x1F68, 0x0345]),
        (0x1FA9, &[0x1F69, 0x0345]),
        (0x1FAA, &[0x1F6A, 0x0345]),
        (0x1FAB, &[0x1F6B, 0x0345]),
        (0x1FAC, &[0x1F6C, 0x0345]),
        (0x1FAD, &[0x1F6D, 0x0345]),
        (0x1FAE, &[0x1F6E, 0x0345]),
        (0x1FAF, &[0x1F6F, 0x0345]),
        (0x1FB0, &[0x03B1, 0x0306]),
        (0x1FB1, &[0x03B1, 0x0304]),
        (0x1FB2, &[0x1F70, 0x0345]),
        (0x1FB3, &[0x03B1, 0x0345]),
        (0x1FB4, &[0x03AC, 0x0345]),
        (0x1FB6, &[0x03B1, 0x0342]),
        (0x1FB7, &[0x1FB6, 0x0345]),
        (0x1FB8, &[0x0391, 0x0306]),
        (0x1FB9, &[0x0391, 0x0304]),
        (0x1FBA, &[0x0391, 0x0300]),
        (0x1FBB, &[0x0386]),
        (0x1FBC, &[0x0391, 0x0345]),
        (0x1FBE, &[0x03B9]),
        (0x1FC1, &[0x00A8, 0x0342]),
        (0x1FC2, &[0x1F74, 0x0345]),
        (0x1FC3, &[0x03B7, 0x0345]),
        (0x1FC4, &[0x03AE, 0x0345]),
        (0x1FC6, &[0x03B7, 0x0342]),
        (0x1FC7, &[0x1FC6, 0x0345]),
        (0x1FC8, &[0x0395, 0x0300]),
        (0x1FC9, &[0x0388]),
        (0x1FCA, &[0x0397, 0x0300]),
        (0x1FCB, &[0x0389]),
        (0x1FCC, &[0x0397, 0x0345]),
        (0x1FCD, &[0x1FBF, 0x0300]),
        (0x1FCE, &[0x1FBF, 0x0301]),
        (0x1FCF, &[0x1FBF, 0x0342]),
        (0x1FD0, &[0x03B9, 0x0306]),
        (0x1FD1, &[0x03B9, 0x0304]),
        (0x1FD2, &[0x03CA, 0x0300]),
        (0x1FD3, &[0x0390]),
        (0x1FD6, &[0x03B9, 0x0342]),
        (0x1FD7, &[0x03CA, 0x0342]),
        (0x1FD8, &[0x0399, 0x0306]),
        (0x1FD9, &[0x0399, 0x0304]),
        (0x1FDA, &[0x0399, 0x0300]),
        (0x1FDB, &[0x038A]),
        (0x1FDD, &[0x1FFE, 0x0300]),
        (0x1FDE, &[0x1FFE, 0x0301]),
        (0x1FDF, &[0x1FFE, 0x0342]),
        (0x1FE0, &[0x03C5, 0x0306]),
        (0x1FE1, &[0x03C5, 0x0304]),
        (0x1FE2, &[0x03CB, 0x0300]),
        (0x1FE3, &[0x03B0]),
        (0x1FE4, &[0x03C1, 0x0313]),
        (0x1FE5, &[0x03C1, 0x0314]),
        (0x1FE6, &[0x03C5, 0x0342]),
        (0x1FE7, &[0x03CB, 0x0342]),
        (0x1FE8, &[0x03A5, 0x0306]),
        (0x1FE9, &[0x03A5, 0x0304]),
        (0x1FEA, &[0x03A5, 0x0300]),
        (0x1FEB, &[0x038E]),
        (0x1FEC, &[0x03A1, 0x0314]),
        (0x1FED, &[0x00A8, 0x0300]),
        (0x1FEE, &[0x0385]),
        (0x1FEF, &[0x0060]),
        (0x1FF2, &[0x1F7C, 0x0345]),
        (0x1FF3, &[0x03C9, 0x0345]),
        (0x1FF4, &[0x03CE, 0x0345]),
        (0x1FF6, &[0x03C9, 0x0342]),
        (0x1FF7, &[0x1FF6, 0x0345]),
        (0x1FF8, &[0x039F, 0x0300]),
        (0x1FF9, &[0x038C]),
        (0x1FFA, &[0x03A9, 0x0300]),
        (0x1FFB, &[0x038F]),
        (0x1FFC, &[0x03A9, 0x0345]),
        (0x1FFD, &[0x00B4]),
        (0x2000, &[0x2002]),
        (0x2001, &[0x2003]),
        (0x2126, &[0x03A9]),
        (0x212A, &[0x004B]),
        (0x212B, &[0x00C5]),
        (0x219A, &[0x2190, 0x0338]),
        (0x219B, &[0x2192, 0x0338]),
        (0x21AE, &[0x2194, 0x0338]),
        (0x21CD, &[0x21D0, 0x0338]),
        (0x21CE, &[0x21D4, 0x0338]),
        (0x21CF, &[0x21D2, 0x0338]),
        (0x2204, &[0x2203, 0x0338]),
        (0x2209, &[0x2208, 0x0338]),
        (0x220C, &[0x220B, 0x0338]),
        (0x2224, &[0x2223, 0x0338]),
        (0x2226, &[0x2225, 0x0338]),
        (0x2241, &[0x223C, 0x0338]),
        (0x2244, &[0x2243, 0x0338]),
        (0x2247, &[0x2245, 0x0338]),
        (0x2249, &[0x2248, 0x0338]),
        (0x2260, &[0x003D, 0x0338]),
        (0x2262, &[0x2261, 0x0338]),
        (0x226D, &[0x224D, 0x0338]),
        (0x226E, &[0x003C, 0x0338]),
        (0x226F, &[0x003E, 0x0338]),
        (0x2270, &[0x2264, 0x0338]),
        (0x2271, &[0x2265, 0x0338]),
        (0x2274, &[0x2272, 0x0338]),
        (0x2275, &[0x2273, 0x0338]),
        (0x2278, &[0x2276, 0x0338]),
        (0x2279, &[0x2277, 0x0338]),
        (0x2280, &[0x227A, 0x0338]),
        (0x2281, &[0x227B, 0x0338]),
        (0x2284, &[0x2282, 0x0338]),
        (0x2285, &[0x2283, 0x0338]),
        (0x2288, &[0x2286, 0x0338]),
        (0x2289, &[0x2287, 0x0338]),
        (0x22AC, &[0x22A2, 0x0338]),
        (0x22AD, &[0x22A8, 0x0338]),
        (0x22AE, &[0x22A9, 0x0338]),
        (0x22AF, &[0x22AB, 0x0338]),
        (0x22E0, &[0x227C, 0x0338]),
        (0x22E1, &[0x227D, 0x0338]),
        (0x22E2, &[0x2291, 0x0338]),
        (0x22E3, &[0x2292, 0x0338]),
        (0x22EA, &[0x22B2, 0x0338]),
        (0x22EB, &[0x22B3, 0x0338]),
        (0x22EC, &[0x22B4, 0x0338]),
        (0x22ED, &[0x22B5, 0x0338]),
        (0x2329, &[0x3008]),
        (0x232A, &[0x3009]),
        (0x2ADC, &[0x2ADD, 0x0338]),
        (0x304C, &[0x304B, 0x3099]),
        (0x304E, &[0x304D, 0x3099]),
        (0x3050, &[0x304F, 0x3099]),
        (0x3052, &[0x3051, 0x3099]),
        (0x3054, &[0x3053, 0x3099]),
        (0x3056, &[0x3055, 0x3099]),
        (0x3058, &[0x3057, 0x3099]),
        (0x305A, &[0x3059, 0x3099]),
        (0x305C, &[0x305B, 0x3099]),
        (0x305E, &[0x305D, 0x3099]),
        (0x3060, &[0x305F, 0x3099]),
        (0x3062, &[0x3061, 0x3099]),
        (0x3065, &[0x3064, 0x3099]),
        (0x3067, &[0x3066, 0x3099]),
        (0x3069, &[0x3068, 0x3099]),
        (0x3070, &[0x306F, 0x3099]),
        (0x3071, &[0x306F, 0x309A]),
        (0x3073, &[0x3072, 0x3099]),
        (0x3074, &[0x3072, 0x309A]),
        (0x3076, &[0x3075, 0x3099]),
        (0x3077, &[0x3075, 0x309A]),
        (0x3079, &[0x3078, 0x3099]),
        (0x307A, &[0x3078, 0x309A]),
        (0x307C, &[0x307B, 0x3099]),
        (0x307D, &[0x307B, 0x309A]),
        (0x3094, &[0x3046, 0x3099]),
        (0x309E, &[0x309D, 0x3099]),
        (0x30AC, &[0x30AB, 0x3099]),
        (0x30AE, &[0x30AD, 0x3099]),
        (0x30B0, &[0x30AF, 0x3099]),
        (0x30B2, &[0x30B1, 0x3099]),
        (0x30B4, &[0x30B3, 0x3099]),
        (0x30B6, &[0x30B5, 0x3099]),
        (0x30B8, &[0x30B7, 0x3099]),
        (0x30BA, &[0x30B9, 0x3099]),
        (0x30BC, &[0x30BB, 0x3099]),
        (0x30BE, &[0x30BD, 0x3099]),
        (0x30C0, &[0x30BF, 0x3099]),
        (0x30C2, &[0x30C1, 0x3099]),
        (0x30C5, &[0x30C4, 0x3099]),
        (0x30C7, &[0x30C6, 0x3099]),
        (0x30C9, &[0x30C8, 0x3099]),
        (0x30D0, &[0x30CF, 0x3099]),
        (0x30D1, &[0x30CF, 0x309A]),
        (0x30D3, &[0x30D2, 0x3099]),
        (0x30D4, &[0x30D2, 0x309A]),
        (0x30D6, &[0x30D5, 0x3099]),
        (0x30D7, &[0x30D5, 0x309A]),
        (0x30D9, &[0x30D8, 0x3099]),
        (0x30DA, &[0x30D8, 0x309A]),
        (0x30DC, &[0x30DB, 0x3099]),
        (0x30DD, &[0x30DB, 0x309A]),
        (0x30F4, &[0x30A6, 0x3099]),
        (0x30F7, &[0x30EF, 0x3099]),
        (0x30F8, &[0x30F0, 0x3099]),
        (0x30F9, &[0x30F1, 0x3099]),
        (0x30FA, &[0x30F2, 0x3099]),
        (0x30FE, &[0x30FD, 0x3099]),
        (0xF900, &[0x8C48]),
        (0xF901, &[0x66F4]),
        (0xF902, &[0x8ECA]),
        (0xF903, &[0x8CC8]),
        (0xF904, &[0x6ED1]),
        (0xF905, &[0x4E32]),
        (0xF906, &[0x53E5]),
        (0xF907, &[0x9F9C]),
        (0xF908, &[0x9F9C]),
        (0xF909, &[0x5951]),
        (0xF90A, &[0x91D1]),
        (0xF90B, &[0x5587]),
        (0xF90C, &[0x5948]),
        (0xF90D, &[0x61F6]),
        (0xF90E, &[0x7669]),
        (0xF90F, &[0x7F85]),
        (0xF910, &[0x863F]),
        (0xF911, &[0x87BA]),
        (0xF912, &[0x88F8]),
        (0xF913, &[0x908F]),
        (0xF914, &[0x6A02]),
        (0xF915, &[0x6D1B]),
        (0xF916, &[0x70D9]),
        (0xF917, &[0x73DE]),
        (0xF918, &[0x843D]),
        (0xF919, &[0x916A]),
        (0xF91A, &[0x99F1]),
        (0xF91B, &[0x4E82]),
        (0xF91C, &[0x5375]),
        (0xF91D, &[0x6B04]),
        (0xF91E, &[0x721B]),
        (0xF91F, &[0x862D]),
        (0xF920, &[0x9E1E]),
        (0xF921, &[0x5D50]),
        (0xF922, &[0x6FEB]),
        (0xF923, &[0x85CD]),
        (0xF924, &[0x8964]),
        (0xF925, &[0x62C9]),
        (0xF926, &[0x81D8]),
        (0xF927, &[0x881F]),
        (0xF928, &[0x5ECA]),
        (0xF929, &[0x6717]),
        (0xF92A, &[0x6D6A]),
        (0xF92B, &[0x72FC]),
        (0xF92C, &[0x90CE]),
        (0xF92D, &[0x4F86]),
        (0xF92E, &[0x51B7]),
        (0xF92F, &[0x52DE]),
        (0xF930, &[0x64C4]),
        (0xF931, &[0x6AD3]),
        (0xF932, &[0x7210]),
        (0xF933, &[0x76E7]),
        (0xF934, &[0x8001]),
        (0xF935, &[0x8606]),
        (0xF936, &[0x865C]),
        (0xF937, &[0x8DEF]),
        (0xF938, &[0x9732]),
        (0xF939, &[0x9B6F]),
        (0xF93A, &[0x9DFA]),
        (0xF93B, &[0x788C]),
        (0xF93C, &[0x797F]),
        (0xF93D, &[0x7DA0]),
        (0xF93E, &[0x83C9]),
        (0xF93F, &[0x9304]),
        (0xF940, &[0x9E7F]),
        (0xF941, &[0x8AD6]),
        (0xF942, &[0x58DF]),
        (0xF943, &[0x5F04]),
        (0xF944, &[0x7C60]),
        (0xF945, &[0x807E]),
        (0xF946, &[0x7262]),
        (0xF947, &[0x78CA]),
        (0xF948, &[0x8CC2]),
        (0xF949, &[0x96F7]),
        (0xF94A, &[0x58D8]),
        (0xF94B, &[0x5C62]),
        (0xF94C, &[0x6A13]),
        (0xF94D, &[0x6DDA]),
        (0xF94E, &[0x6F0F]),
        (0xF94F, &[0x7D2F]),
        (0xF950, &[0x7E37]),
        (0xF951, &[0x964B]),
        (0xF952, &[0x52D2]),
        (0xF953, &[0x808B]),
        (0xF954, &[0x51DC]),
        (0xF955, &[0x51CC]),
        (0xF956, &[0x7A1C]),
        (0xF957, &[0x7DBE]),
        (0xF958, &[0x83F1]),
        (0xF959, &[0x9675]),
        (0xF95A, &[0x8B80]),
        (0xF95B, &[0x62CF]),
        (0xF95C, &[0x6A02]),
        (0xF95D, &[0x8AFE]),
        (0xF95E, &[0x4E39]),
        (0xF95F, &[0x5BE7]),
        (0xF960, &[0x6012]),
        (0xF961, &[0x7387]),
        (0xF962, &[0x7570]),
        (0xF963, &[0x5317]),
        (0xF964, &[0x78FB]),
        (0xF965, &[0x4FBF]),
        (0xF966, &[0x5FA9]),
        (0xF967, &[0x4E0D]),
        (0xF968, &[0x6CCC]),
        (0xF969, &[0x6578]),
        (0xF96A, &[0x7D22]),
        (0xF96B, &[0x53C3]),
        (0xF96C, &[0x585E]),
        (0xF96D, &[0x7701]),
        (0xF96E, &[0x8449]),
        (0xF96F, &[0x8AAA]),
        (0xF970, &[0x6BBA]),
        (0xF971, &[0x8FB0]),
        (0xF972, &[0x6C88]),
        (0xF973, &[0x62FE]),
        (0xF974, &[0x82E5]),
        (0xF975, &[0x63A0]),
        (0xF976, &[0x7565]),
        (0xF977, &[0x4EAE]),
        (0xF978, &[0x5169]),
        (0xF979, &[0x51C9]),
        (0xF97A, &[0x6881]),
        (0xF97B, &[0x7CE7]),
        (0xF97C, &[0x826F]),
        (0xF97D, &[0x8AD2]),
        (0xF97E, &[0x91CF]),
        (0xF97F, &[0x52F5]),
        (0xF980, &[0x5442]),
        (0xF981, &[0x5973]),
        (0xF982, &[0x5EEC]),
        (0xF983, &[0x65C5]),
        (0xF984, &[0x6FFE]),
        (0xF985, &[0x792A]),
        (0xF986, &[0x95AD]),
        (0xF987, &[0x9A6A]),
        (0xF988, &[0x9E97]),
        (0xF989, &[0x9ECE]),
        (0xF98A, &[0x529B]),
        (0xF98B, &[0x66C6]),
        (0xF98C, &[0x6B77]),
        (0xF98D, &[0x8F62]),
        (0xF98E, &[0x5E74]),
        (0xF98F, &[0x6190]),
        (0xF990, &[0x6200]),
        (0xF991, &[0x649A]),
        (0xF992, &[0x6F23]),
        (0xF993, &[0x7149]),
        (0xF994, &[0x7489]),
        (0xF995, &[0x79CA]),
        (0xF996, &[0x7DF4]),
        (0xF997, &[0x806F]),
        (0xF998, &[0x8F26]),
        (0xF999, &[0x84EE]),
        (0xF99A, &[0x9023]),
        (0xF99B, &[0x934A]),
        (0xF99C, &[0x5217]),
        (0xF99D, &[0x52A3]),
        (0xF99E, &[0x54BD]),
        (0xF99F, &[0x70C8]),
        (0xF9A0, &[0x88C2]),
        (0xF9A1, &[0x8AAA]),
        (0xF9A2, &[0x5EC9]),
        (0xF9A3, &[0x5FF5]),
        (0xF9A4, &[0x637B]),
        (0xF9A5, &[0x6BAE]),
        (0xF9A6, &[0x7C3E]),
        (0xF9A7, &[0x7375]),
        (0xF9A8, &[0x4EE4]),
        (0xF9A9, &[0x56F9]),
        (0xF9AA, &[0x5BE7]),
        (0xF9AB, &[0x5DBA]),
        (0xF9AC, &[0x601C]),
        (0xF9AD, &[0x73B2]),
        (0xF9AE, &[0x7469]),
        (0xF9AF, &[0x7F9A]),
        (0xF9B0, &[0x8046]),
        (0xF9B1, &[0x9234]),
        (0xF9B2, &[0x96F6]),
        (0xF9B3, &[0x9748]),
        (0xF9B4, &[0x9818]),
        (0xF9B5, &[0x4F8B]),
        (0xF9B6, &[0x79AE]),
        (0xF9B7, &[0x91B4]),
        (0xF9B8, &[0x96B8]),
        (0xF9B9, &[0x60E1]),
        (0xF9BA, &[0x4E86]),
        (0xF9BB, &[0x50DA]),
        (0xF9BC, &[0x5BEE]),
        (0xF9BD, &[0x5C3F]),
        (0xF9BE, &[0x6599]),
        (0xF9BF, &[0x6A02]),
        (0xF9C0, &[0x71CE]),
        (0xF9C1, &[0x7642]),
        (0xF9C2, &[0x84FC]),
        (0xF9C3, &[0x907C]),
        (0xF9C4, &[0x9F8D]),
        (0xF9C5, &[0x6688]),
        (0xF9C6, &[0x962E]),
        (0xF9C7, &[0x5289]),
        (0xF9C8, &[0x677B]),
        (0xF9C9, &[0x67F3]),
        (0xF9CA, &[0x6D41]),
        (0xF9CB, &[0x6E9C]),
        (0xF9CC, &[0x7409]),
        (0xF9CD, &[0x7559]),
        (0xF9CE, &[0x786B]),
        (0xF9CF, &[0x7D10]),
        (0xF9D0, &[0x985E]),
        (0xF9D1, &[0x516D]),
        (0xF9D2, &[0x622E]),
        (0xF9D3, &[0x9678]),
        (0xF9D4, &[0x502B]),
        (0xF9D5, &[0x5D19]),
        (0xF9D6, &[0x6DEA]),
        (0xF9D7, &[0x8F2A]),
        (0xF9D8, &[0x5F8B]),
        (0xF9D9, &[0x6144]),
        (0xF9DA, &[0x6817]),
        (0xF9DB, &[0x7387]),
        (0xF9DC, &[0x9686]),
        (0xF9DD, &[0x5229]),
        (0xF9DE, &[0x540F]),
        (0xF9DF, &[0x5C65]),
        (0xF9E0, &[0x6613]),
        (0xF9E1, &[0x674E]),
        (0xF9E2, &[0x68A8]),
        (0xF9E3, &[0x6CE5]),
        (0xF9E4, &[0x7406]),
        (0xF9E5, &[0x75E2]),
        (0xF9E6, &[0x7F79]),
        (0xF9E7, &[0x88CF]),
        (0xF9E8, &[0x88E1]),
        (0xF9E9, &[0x91CC]),
        (0xF9EA, &[0x96E2]),
        (0xF9EB, &[0x533F]),
        (0xF9EC, &[0x6EBA]),
        (0xF9ED, &[0x541D]),
        (0xF9EE, &[0x71D0]),
        (0xF9EF, &[0x7498]),
        (0xF9F0, &[0x85FA]),
        (0xF9F1, &[0x96A3]),
        (0xF9F2, &[0x9C57]),
        (0xF9F3, &[0x9E9F]),
        (0xF9F4, &[0x6797]),
        (0xF9F5, &[0x6DCB]),
        (0xF9F6, &[0x81E8]),
        (0xF9F7, &[0x7ACB]),
        (0xF9F8, &[0x7B20]),
        (0xF9F9, &[0x7C92]),
        (0xF9FA, &[0x72C0]),
        (0xF9FB, &[0x7099]),
        (0xF9FC, &[0x8B58]),
        (0xF9FD, &[0x4EC0]),
        (0xF9FE, &[0x8336]),
        (0xF9FF, &[0x523A]),
        (0xFA00, &[0x5207]),
        (0xFA01, &[0x5EA6]),
        (0xFA02, &[0x62D3]),
        (0xFA03, &[0x7CD6]),
        (0xFA04, &[0x5B85]),
        (0xFA05, &[0x6D1E]),
        (0xFA06, &[0x66B4]),
        (0xFA07, &[0x8F3B]),
        (0xFA08, &[0x884C]),
        (0xFA09, &[0x964D]),
        (0xFA0A, &[0x898B]),
        (0xFA0B, &[0x5ED3]),
        (0xFA0C, &[0x5140]),
        (0xFA0D, &[0x55C0]),
        (0xFA10, &[0x585A]),
        (0xFA12, &[0x6674]),
        (0xFA15, &[0x51DE]),
        (0xFA16, &[0x732A]),
        (0xFA17, &[0x76CA]),
        (0xFA18, &[0x793C]),
        (0xFA19, &[0x795E]),
        (0xFA1A, &[0x7965]),
        (0xFA1B, &[0x798F]),
        (0xFA1C, &[0x9756]),
        (0xFA1D, &[0x7CBE]),
        (0xFA1E, &[0x7FBD]),
        (0xFA20, &[0x8612]),
        (0xFA22, &[0x8AF8]),
        (0xFA25, &[0x9038]),
        (0xFA26, &[0x90FD]),
        (0xFA2A, &[0x98EF]),
        (0xFA2B, &[0x98FC]),
        (0xFA2C, &[0x9928]),
        (0xFA2D, &[0x9DB4]),
        (0xFA2E, &[0x90DE]),
        (0xFA2F, &[0x96B7]),
        (0xFA30, &[0x4FAE]),
        (0xFA31, &[0x50E7]),
        (0xFA32, &[0x514D]),
        (0xFA33, &[0x52C9]),
        (0xFA34, &[0x52E4]),
        (0xFA35, &[0x5351]),
        (0xFA36, &[0x559D]),
        (0xFA37, &[0x5606]),
        (0xFA38, &[0x5668]),
        (0xFA39, &[0x5840]),
        (0xFA3A, &[0x58A8]),
        (0xFA3B, &[0x5C64]),
        (0xFA3C, &[0x5C6E]),
        (0xFA3D, &[0x6094]),
        (0xFA3E, &[0x6168]),
        (0xFA3F, &[0x618E]),
        (0xFA40, &[0x61F2]),
        (0xFA41, &[0x654F]),
        (0xFA42, &[0x65E2]),
        (0xFA43, &[0x6691]),
        (0xFA44, &[0x6885]),
        (0xFA45, &[0x6D77]),
        (0xFA46, &[0x6E1A]),
        (0xFA47, &[0x6F22]),
        (0xFA48, &[0x716E]),
        (0xFA49, &[0x722B]),
        (0xFA4A, &[0x7422]),
        (0xFA4B, &[0x7891]),
        (0xFA4C, &[0x793E]),
        (0xFA4D, &[0x7949]),
        (0xFA4E, &[0x7948]),
        (0xFA4F, &[0x7950]),
        (0xFA50, &[0x7956]),
        (0xFA51, &[0x795D]),
        (0xFA52, &[0x798D]),
        (0xFA53, &[0x798E]),
        (0xFA54, &[0x7A40]),
        (0xFA55, &[0x7A81]),
        (0xFA56, &[0x7BC0]),
        (0xFA57, &[0x7DF4]),
        (0xFA58, &[0x7E09]),
        (0xFA59, &[0x7E41]),
        (0xFA5A, &[0x7F72]),
        (0xFA5B, &[0x8005]),
        (0xFA5C, &[0x81ED]),
        (0xFA5D, &[0x8279]),
        (0xFA5E, &[0x8279]),
        (0xFA5F, &[0x8457]),
        (0xFA60, &[0x8910]),
        (0xFA61, &[0x8996]),
        (0xFA62, &[0x8B01]),
        (0xFA63, &[0x8B39]),
        (0xFA64, &[0x8CD3]),
        (0xFA65, &[0x8D08]),
        (0xFA66, &[0x8FB6]),
        (0xFA67, &[0x9038]),
        (0xFA68, &[0x96E3]),
        (0xFA69, &[0x97FF]),
        (0xFA6A, &[0x983B]),
        (0xFA6B, &[0x6075]),
        (0xFA6C, &[0x242EE]),
        (0xFA6D, &[0x8218]),
        (0xFA70, &[0x4E26]),
        (0xFA71, &[0x51B5]),
        (0xFA72, &[0x5168]),
        (0xFA73, &[0x4F80]),
        (0xFA74, &[0x5145]),
        (0xFA75, &[0x5180]),
        (0xFA76, &[0x52C7]),
        (0xFA77, &[0x52FA]),
        (0xFA78, &[0x559D]),
        (0xFA79, &[0x5555]),
        (0xFA7A, &[0x5599]),
        (0xFA7B, &[0x55E2]),
        (0xFA7C, &[0x585A]),
        (0xFA7D, &[0x58B3]),
        (0xFA7E, &[0x5944]),
        (0xFA7F, &[0x5954]),
        (0xFA80, &[0x5A62]),
        (0xFA81, &[0x5B28]),
        (0xFA82, &[0x5ED2]),
        (0xFA83, &[0x5ED9]),
        (0xFA84, &[0x5F69]),
        (0xFA85, &[0x5FAD]),
        (0xFA86, &[0x60D8]),
        (0xFA87, &[0x614E]),
        (0xFA88, &[0x6108]),
        (0xFA89, &[0x618E]),
        (0xFA8A, &[0x6160]),
        (0xFA8B, &[0x61F2]),
        (0xFA8C, &[0x6234]),
        (0xFA8D, &[0x63C4]),
        (0xFA8E, &[0x641C]),
        (0xFA8F, &[0x6452]),
        (0xFA90, &[0x6556]),
        (0xFA91, &[0x6674]),
        (0xFA92, &[0x6717]),
        (0xFA93, &[0x671B]),
        (0xFA94, &[0x6756]),
        (0xFA95, &[0x6B79]),
        (0xFA96, &[0x6BBA]),
        (0xFA97, &[0x6D41]),
        (0xFA98, &[0x6EDB]),
        (0xFA99, &[0x6ECB]),
        (0xFA9A, &[0x6F22]),
        (0xFA9B, &[0x701E]),
        (0xFA9C, &[0x716E]),
        (0xFA9D, &[0x77A7]),
        (0xFA9E, &[0x7235]),
        (0xFA9F, &[0x72AF]),
        (0xFAA0, &[0x732A]),
        (0xFAA1, &[0x7471]),
        (0xFAA2, &[0x7506]),
        (0xFAA3, &[0x753B]),
        (0xFAA4, &[0x761D]),
        (0xFAA5, &[0x761F]),
        (0xFAA6, &[0x76CA]),
        (0xFAA7, &[0x76DB]),
        (0xFAA8, &[0x76F4]),
        (0xFAA9, &[0x774A]),
        (0xFAAA, &[0x7740]),
        (0xFAAB, &[0x78CC]),
        (0xFAAC, &[0x7AB1]),
        (0xFAAD, &[0x7BC0]),
        (0xFAAE, &[0x7C7B]),
        (0xFAAF, &[0x7D5B]),
        (0xFAB0, &[0x7DF4]),
        (0xFAB1, &[0x7F3E]),
        (0xFAB2, &[0x8005]),
        (0xFAB3, &[0x8352]),
        (0xFAB4, &[0x83EF]),
        (0xFAB5, &[0x8779]),
        (0xFAB6, &[0x8941]),
        (0xFAB7, &[0x8986]),
        (0xFAB8, &[0x8996]),
        (0xFAB9, &[0x8ABF]),
        (0xFABA, &[0x8AF8]),
        (0xFABB, &[0x8ACB]),
        (0xFABC, &[0x8B01]),
        (0xFABD, &[0x8AFE]),
        (0xFABE, &[0x8AED]),
        (0xFABF, &[0x8B39]),
        (0xFAC0, &[0x8B8A]),
        (0xFAC1, &[0x8D08]),
        (0xFAC2, &[0x8F38]),
        (0xFAC3, &[0x9072]),
        (0xFAC4, &[0x9199]),
        (0xFAC5, &[0x9276]),
        (0xFAC6, &[0x967C]),
        (0xFAC7, &[0x96E3]),
        (0xFAC8, &[0x9756]),
        (0xFAC9, &[0x97DB]),
        (0xFACA, &[0x97FF]),
        (0xFACB, &[0x980B]),
        (0xFACC, &[0x983B]),
        (0xFACD, &[0x9B12]),
        (0xFACE, &[0x9F9C]),
        (0xFACF, &[0x2284A]),
        (0xFAD0, &[0x22844]),
        (0xFAD1, &[0x233D5]),
        (0xFAD2, &[0x3B9D]),
        (0xFAD3, &[0x4018]),
        (0xFAD4, &[0x4039]),
        (0xFAD5, &[0x25249]),
        (0xFAD6, &[0x25CD0]),
        (0xFAD7, &[0x27ED3]),
        (0xFAD8, &[0x9F43]),
        (0xFAD9, &[0x9F8E]),
        (0xFB1D, &[0x05D9, 0x05B4]),
        (0xFB1F, &[0x05F2, 0x05B7]),
        (0xFB2A, &[0x05E9, 0x05C1]),
        (0xFB2B, &[0x05E9, 0x05C2]),
        (0xFB2C, &[0xFB49, 0x05C1]),
        (0xFB2D, &[0xFB49, 0x05C2]),
        (0xFB2E, &[0x05D0, 0x05B7]),
        (0xFB2F, &[0x05D0, 0x05B8]),
        (0xFB30, &[0x05D0, 0x05BC]),
        (0xFB31, &[0x05D1, 0x05BC]),
        (0xFB32, &[0x05D2, 0x05BC]),
        (0xFB33, &[0x05D3, 0x05BC]),
        (0xFB34, &[0x05D4, 0x05BC]),
        (0xFB35, &[0x05D5, 0x05BC]),
        (0xFB36, &[0x05D6, 0x05BC]),
        (0xFB38, &[0x05D8, 0x05BC]),
        (0xFB39, &[0x05D9, 0x05BC]),
        (0xFB3A, &[0x05DA, 0x05BC]),
        (0xFB3B, &[0x05DB, 0x05BC]),
        (0xFB3C, &[0x05DC, 0x05BC]),
        (0xFB3E, &[0x05DE, 0x05BC]),
        (0xFB40, &[0x05E0, 0x05BC]),
        (0xFB41, &[0x05E1, 0x05BC]),
        (0xFB43, &[0x05E3, 0x05BC]),
        (0xFB44, &[0x05E4, 0x05BC]),
        (0xFB46, &[0x05E6, 0x05BC]),
        (0xFB47, &[0x05E7, 0x05BC]),
        (0xFB48, &[0x05E8, 0x05BC]),
        (0xFB49, &[0x05E9, 0x05BC]),
        (0xFB4A, &[0x05EA, 0x05BC]),
        (0xFB4B, &[0x05D5, 0x05B9]),
        (0xFB4C, &[0x05D1, 0x05BF]),
        (0xFB4D, &[0x05DB, 0x05BF]),
        (0xFB4E, &[0x05E4, 0x05BF]),
        (0x1109A, &[0x11099, 0x110BA]),
        (0x1109C, &[0x1109B, 0x110BA]),
        (0x110AB, &[0x110A5, 0x110BA]),
        (0x1112E, &[0x11131, 0x11127]),
        (0x1112F, &[0x11132, 0x11127]),
        (0x1134B, &[0x11347, 0x1133E]),
        (0x1134C, &[0x11347, 0x11357]),
        (0x114BB, &[0x114B9, 0x114BA]),
        (0x114BC, &[0x114B9, 0x114B0]),
        (0x114BE, &[0x114B9, 0x114BD]),
        (0x115BA, &[0x115B8, 0x115AF]),
        (0x115BB, &[0x115B9, 0x115AF]),
        (0x11938, &[0x11935, 0x11930]),
        (0x1D15E, &[0x1D157, 0x1D165]),
        (0x1D15F, &[0x1D158, 0x1D165]),
        (0x1D160, &[0x1D15F, 0x1D16E]),
        (0x1D161, &[0x1D15F, 0x1D16F]),
        (0x1D162, &[0x1D15F, 0x1D170]),
        (0x1D163, &[0x1D15F, 0x1D171]),
        (0x1D164, &[0x1D15F, 0x1D172]),
        (0x1D1BB, &[0x1D1B9, 0x1D165]),
        (0x1D1BC, &[0x1D1BA, 0x1D165]),
        (0x1D1BD, &[0x1D1BB, 0x1D16E]),
        (0x1D1BE, &[0x1D1BC, 0x1D16E]),
        (0x1D1BF, &[0x1D1BB, 0x1D16F]),
        (0x1D1C0, &[0x1D1BC, 0x1D16F]),
        (0x2F800, &[0x4E3D]),
        (0x2F801, &[0x4E38]),
        (0x2F802, &[0x4E41]),
        (0x2F803, &[0x20122]),
        (0x2F804, &[0x4F60]),
        (0x2F805, &[0x4FAE]),
        (0x2F806, &[0x4FBB]),
        (0x2F807, &[0x5002]),
        (0x2F808, &[0x507A]),
        (0x2F809, &[0x5099]),
        (0x2F80A, &[0x50E7]),
        (0x2F80B, &[0x50CF]),
        (0x2F80C, &[0x349E]),
        (0x2F80D, &[0x2063A]),
        (0x2F80E, &[0x514D]),
        (0x2F80F, &[0x5154]),
        (0x2F810, &[0x5164]),
        (0x2F811, &[0x5177]),
        (0x2F812, &[0x2051C]),
        (0x2F813, &[0x34B9]),
        (0x2F814, &[0x5167]),
        (0x2F815, &[0x518D]),
        (0x2F816, &[0x2054B]),
        (0x2F817, &[0x5197]),
        (0x2F818, &[0x51A4]),
        (0x2F819, &[0x4ECC]),
        (0x2F81A, &[0x51AC]),
        (0x2F81B, &[0x51B5]),
        (0x2F81C, &[0x291DF]),
        (0x2F81D, &[0x51F5]),
        (0x2F81E, &[0x5203]),
        (0x2F81F, &[0x34DF]),
        (0x2F820, &[0x523B]),
        (0x2F821, &[0x5246]),
        (0x2F822, &[0x5272]),
        (0x2F823, &[0x5277]),
        (0x2F824, &[0x3515]),
        (0x2F825, &[0x52C7]),
        (0x2F826, &[0x52C9]),
        (0x2F827, &[0x52E4]),
        (0x2F828, &[0x52FA]),
        (0x2F829, &[0x5305]),
        (0x2F82A, &[0x5306]),
        (0x2F82B, &[0x5317]),
        (0x2F82C, &[0x5349]),
        (0x2F82D, &[0x5351]),
        (0x2F82E, &[0x535A]),
        (0x2F82F, &[0x5373]),
        (0x2F830, &[0x537D]),
        (0x2F831, &[0x537F]),
        (0x2F832, &[0x537F]),
        (0x2F833, &[0x537F]),
        (0x2F834, &[0x20A2C]),
        (0x2F835, &[0x7070]),
        (0x2F836, &[0x53CA]),
        (0x2F837, &[0x53DF]),
        (0x2F838, &[0x20B63]),
        (0x2F839, &[0x53EB]),
        (0x2F83A, &[0x53F1]),
        (0x2F83B, &[0x5406]),
        (0x2F83C, &[0x549E]),
        (0x2F83D, &[0x5438]),
        (0x2F83E, &[0x5448]),
        (0x2F83F, &[0x5468]),
        (0x2F840, &[0x54A2]),
        (0x2F841, &[0x54F6]),
        (0x2F842, &[0x5510]),
        (0x2F843, &[0x5553]),
        (0x2F844, &[0x5563]),
        (0x2F845, &[0x5584]),
        (0x2F846, &[0x5584]),
        (0x2F847, &[0x5599]),
        (0x2F848, &[0x55AB]),
        (0x2F849, &[0x55B3]),
        (0x2F84A, &[0x55C2]),
        (0x2F84B, &[0x5716]),
        (0x2F84C, &[0x5606]),
        (0x2F84D, &[0x5717]),
        (0x2F84E, &[0x5651]),
        (0x2F84F, &[0x5674]),
        (0x2F850, &[0x5207]),
        (0x2F851, &[0x58EE]),
        (0x2F852, &[0x57CE]),
        (0x2F853, &[0x57F4]),
        (0x2F854, &[0x580D]),
        (0x2F855, &[0x578B]),
        (0x2F856, &[0x5832]),
        (0x2F857, &[0x5831]),
        (0x2F858, &[0x58AC]),
        (0x2F859, &[0x214E4]),
        (0x2F85A, &[0x58F2]),
        (0x2F85B, &[0x58F7]),
        (0x2F85C, &[0x5906]),
        (0x2F85D, &[0x591A]),
        (0x2F85E, &[0x5922]),
        (0x2F85F, &[0x5962]),
        (0x2F860, &[0x216A8]),
        (0x2F861, &[0x216EA]),
        (0x2F862, &[0x59EC]),
        (0x2F863, &[0x5A1B]),
        (0x2F864, &[0x5A27]),
        (0x2F865, &[0x59D8]),
        (0x2F866, &[0x5A66]),
        (0x2F867, &[0x36EE]),
        (0x2F868, &[0x36FC]),
        (0x2F869, &[0x5B08]),
        (0x2F86A, &[0x5B3E]),
        (0x2F86B, &[0x5B3E]),
        (0x2F86C, &[0x219C8]),
        (0x2F86D, &[0x5BC3]),
        (0x2F86E, &[0x5BD8]),
        (0x2F86F, &[0x5BE7]),
        (0x2F870, &[0x5BF3]),
        (0x2F871, &[0x21B18]),
        (0x2F872, &[0x5BFF]),
        (0x2F873, &[0x5C06]),
        (0x2F874, &[0x5F53]),
        (0x2F875, &[0x5C22]),
        (0x2F876, &[0x3781]),
        (0x2F877, &[0x5C60]),
        (0x2F878, &[0x5C6E]),
        (0x2F879, &[0x5CC0]),
        (0x2F87A, &[0x5C8D]),
        (0x2F87B, &[0x21DE4]),
        (0x2F87C, &[0x5D43]),
        (0x2F87D, &[0x21DE6]),
        (0x2F87E, &[0x5D6E]),
        (0x2F87F, &[0x5D6B]),
        (0x2F880, &[0x5D7C]),
        (0x2F881, &[0x5DE1]),
        (0x2F882, &[0x5DE2]),
        (0x2F883, &[0x382F]),
        (0x2F884, &[0x5DFD]),
        (0x2F885, &[0x5E28]),
        (0x2F886, &[0x5E3D]),
        (0x2F887, &[0x5E69]),
        (0x2F888, &[0x3862]),
        (0x2F889, &[0x22183]),
        (0x2F88A, &[0x387C]),
        (0x2F88B, &[0x5EB0]),
        (0x2F88C, &[0x5EB3]),
        (0x2F88D, &[0x5EB6]),
        (0x2F88E, &[0x5ECA]),
        (0x2F88F, &[0x2A392]),
        (0x2F890, &[0x5EFE]),
        (0x2F891, &[0x22331]),
        (0x2F892, &[0x22331]),
        (0x2F893, &[0x8201]),
        (0x2F894, &[0x5F22]),
        (0x2F895, &[0x5F22]),
        (0x2F896, &[0x38C7]),
        (0x2F897, &[0x232B8]),
        (0x2F898, &[0x261DA]),
        (0x2F899, &[0x5F62]),
        (0x2F89A, &[0x5F6B]),
        (0x2F89B, &[0x38E3]),
        (0x2F89C, &[0x5F9A]),
        (0x2F89D, &[0x5FCD]),
        (0x2F89E, &[0x5FD7]),
        (0x2F89F, &[0x5FF9]),
        (0x2F8A0, &[0x6081]),
        (0x2F8A1, &[0x393A]),
        (0x2F8A2, &[0x391C]),
        (0x2F8A3, &[0x6094]),
        (0x2F8A4, &[0x226D4]),
        (0x2F8A5, &[0x60C7]),
        (0x2F8A6, &[0x6148]),
        (0x2F8A7, &[0x614C]),
        (0x2F8A8, &[0x614E]),
        (0x2F8A9, &[0x614C]),
        (0x2F8AA, &[0x617A]),
        (0x2F8AB, &[0x618E]),
        (0x2F8AC, &[0x61B2]),
        (0x2F8AD, &[0x61A4]),
        (0x2F8AE, &[0x61AF]),
        (0x2F8AF, &[0x61DE]),
        (0x2F8B0, &[0x61F2]),
        (0x2F8B1, &[0x61F6]),
        (0x2F8B2, &[0x6210]),
        (0x2F8B3, &[0x621B]),
        (0x2F8B4, &[0x625D]),
        (0x2F8B5, &[0x62B1]),
        (0x2F8B6, &[0x62D4]),
        (0x2F8B7, &[0x6350]),
        (0x2F8B8, &[0x22B0C]),
        (0x2F8B9, &[0x633D]),
        (0x2F8BA, &[0x62FC]),
        (0x2F8BB, &[0x6368]),
        (0x2F8BC, &[0x6383]),
        (0x2F8BD, &[0x63E4]),
        (0x2F8BE, &[0x22BF1]),
        (0x2F8BF, &[0x6422]),
        (0x2F8C0, &[0x63C5]),
        (0x2F8C1, &[0x63A9]),
        (0x2F8C2, &[0x3A2E]),
        (0x2F8C3, &[0x6469]),
        (0x2F8C4, &[0x647E]),
        (0x2F8C5, &[0x649D]),
        (0x2F8C6, &[0x6477]),
        (0x2F8C7, &[0x3A6C]),
        (0x2F8C8, &[0x654F]),
        (0x2F8C9, &[0x656C]),
        (0x2F8CA, &[0x2300A]),
        (0x2F8CB, &[0x65E3]),
        (0x2F8CC, &[0x66F8]),
        (0x2F8CD, &[0x6649]),
        (0x2F8CE, &[0x3B19]),
        (0x2F8CF, &[0x6691]),
        (0x2F8D0, &[0x3B08]),
        (0x2F8D1, &[0x3AE4]),
        (0x2F8D2, &[0x5192]),
        (0x2F8D3, &[0x5195]),
        (0x2F8D4, &[0x6700]),
        (0x2F8D5, &[0x669C]),
        (0x2F8D6, &[0x80AD]),
        (0x2F8D7, &[0x43D9]),
        (0x2F8D8, &[0x6717]),
        (0x2F8D9, &[0x671B]),
        (0x2F8DA, &[0x6721]),
        (0x2F8DB, &[0x675E]),
        (0x2F8DC, &[0x6753]),
        (0x2F8DD, &[0x233C3]),
        (0x2F8DE, &[0x3B49]),
        (0x2F8DF, &[0x67FA]),
        (0x2F8E0, &[0x6785]),
        (0x2F8E1, &[0x6852]),
        (0x2F8E2, &[0x6885]),
        (0x2F8E3, &[0x2346D]),
        (0x2F8E4, &[0x688E]),
        (0x2F8E5, &[0x681F]),
        (0x2F8E6, &[0x6914]),
        (0x2F8E7, &[0x3B9D]),
        (0x2F8E8, &[0x6942]),
        (0x2F8E9, &[0x69A3]),
        (0x2F8EA, &[0x69EA]),
        (0x2F8EB, &[0x6AA8]),
        (0x2F8EC, &[0x236A3]),
        (0x2F8ED, &[0x6ADB]),
        (0x2F8EE, &[0x3C18]),
        (0x2F8EF, &[0x6B21]),
        (0x2F8F0, &[0x238A7]),
        (0x2F8F1, &[0x6B54]),
        (0x2F8F2, &[0x3C4E]),
        (0x2F8F3, &[0x6B72]),
        (0x2F8F4, &[0x6B9F]),
        (0x2F8F5, &[0x6BBA]),
        (0x2F8F6, &[0x6BBB]),
        (0x2F8F7, &[0x23A8D]),
        (0x2F8F8, &[0x21D0B]),
        (0x2F8F9, &[0x23AFA]),
        (0x2F8FA, &[0x6C4E]),
        (0x2F8FB, &[0x23CBC]),
        (0x2F8FC, &[0x6CBF]),
        (0x2F8FD, &[0x6CCD]),
        (0x2F8FE, &[0x6C67]),
        (0x2F8FF, &[0x6D16]),
        (0x2F900, &[0x6D3E]),
        (0x2F901, &[0x6D77]),
        (0x2F902, &[0x6D41]),
        (0x2F903, &[0x6D69]),
        (0x2F904, &[0x6D78]),
        (0x2F905, &[0x6D85]),
        (0x2F906, &[0x23D1E]),
        (0x2F907, &[0x6D34]),
        (0x2F908, &[0x6E2F]),
        (0x2F909, &[0x6E6E]),
        (0x2F90A, &[0x3D33]),
        (0x2F90B, &[0x6ECB]),
        (0x2F90C, &[0x6EC7]),
        (0x2F90D, &[0x23ED1]),
        (0x2F90E, &[0x6DF9]),
        (0x2F90F, &[0x6F6E]),
        (0x2F910, &[0x23F5E]),
        (0x2F911, &[0x23F8E]),
        (0x2F912, &[0x6FC6]),
        (0x2F913, &[0x7039]),
        (0x2F914, &[0x701E]),
        (0x2F915, &[0x701B]),
        (0x2F916, &[0x3D96]),
        (0x2F917, &[0x704A]),
        (0x2F918, &[0x707D]),
        (0x2F919, &[0x7077]),
        (0x2F91A, &[0x70AD]),
        (0x2F91B, &[0x20525]),
        (0x2F91C, &[0x7145]),
        (0x2F91D, &[0x24263]),
        (0x2F91E, &[0x719C]),
        (0x2F91F, &[0x243AB]),
        (0x2F920, &[0x7228]),
        (0x2F921, &[0x7235]),
        (0x2F922, &[0x7250]),
        (0x2F923, &[0x24608]),
        (0x2F924, &[0x7280]),
        (0x2F925, &[0x7295]),
        (0x2F926, &[0x24735]),
        (0x2F927, &[0x24814]),
        (0x2F928, &[0x737A]),
        (0x2F929, &[0x738B]),
        (0x2F92A, &[0x3EAC]),
        (0x2F92B, &[0x73A5]),
        (0x2F92C, &[0x3EB8]),
        (0x2F92D, &[0x3EB8]),
        (0x2F92E, &[0x7447]),
        (0x2F92F, &[0x745C]),
        (0x2F930, &[0x7471]),
        (0x2F931, &[0x7485]),
        (0x2F932, &[0x74CA]),
        (0x2F933, &[0x3F1B]),
        (0x2F934, &[0x7524]),
        (0x2F935, &[0x24C36]),
        (0x2F936, &[0x753E]),
        (0x2F937, &[0x24C92]),
        (0x2F938, &[0x7570]),
        (0x2F939, &[0x2219F]),
        (0x2F93A, &[0x7610]),
        (0x2F93B, &[0x24FA1]),
        (0x2F93C, &[0x24FB8]),
        (0x2F93D, &[0x25044]),
        (0x2F93E, &[0x3FFC]),
        (0x2F93F, &[0x4008]),
        (0x2F940, &[0x76F4]),
        (0x2F941, &[0x250F3]),
        (0x2F942, &[0x250F2]),
        (0x2F943, &[0x25119]),
        (0x2F944, &[0x25133]),
        (0x2F945, &[0x771E]),
        (0x2F946, &[0x771F]),
        (0x2F947, &[0x771F]),
        (0x2F948, &[0x774A]),
        (0x2F949, &[0x4039]),
        (0x2F94A, &[0x778B]),
        (0x2F94B, &[0x4046]),
        (0x2F94C, &[0x4096]),
        (0x2F94D, &[0x2541D]),
        (0x2F94E, &[0x784E]),
        (0x2F94F, &[0x788C]),
        (0x2F950, &[0x78CC]),
        (0x2F951, &[0x40E3]),
        (0x2F952, &[0x25626]),
        (0x2F953, &[0x7956]),
        (0x2F954, &[0x2569A]),
        (0x2F955, &[0x256C5]),
        (0x2F956, &[0x798F]),
        (0x2F957, &[0x79EB]),
        (0x2F958, &[0x412F]),
        (0x2F959, &[0x7A40]),
        (0x2F95A, &[0x7A4A]),
        (0x2F95B, &[0x7A4F]),
        (0x2F95C, &[0x2597C]),
        (0x2F95D, &[0x25AA7]),
        (0x2F95E, &[0x25AA7]),
        (0x2F95F, &[0x7AEE]),
        (0x2F960, &[0x4202]),
        (0x2F961, &[0x25BAB]),
        (0x2F962, &[0x7BC6]),
        (0x2F963, &[0x7BC9]),
        (0x2F964, &[0x4227]),
        (0x2F965, &[0x25C80]),
        (0x2F966, &[0x7CD2]),
        (0x2F967, &[0x42A0]),
        (0x2F968, &[0x7CE8]),
        (0x2F969, &[0x7CE3]),
        (0x2F96A, &[0x7D00]),
        (0x2F96B, &[0x25F86]),
        (0x2F96C, &[0x7D63]),
        (0x2F96D, &[0x4301]),
        (0x2F96E, &[0x7DC7]),
        (0x2F96F, &[0x7E02]),
        (0x2F970, &[0x7E45]),
        (0x2F971, &[0x4334]),
        (0x2F972, &[0x26228]),
        (0x2F973, &[0x26247]),
        (0x2F974, &[0x4359]),
        (0x2F975, &[0x262D9]),
        (0x2F976, &[0x7F7A]),
        (0x2F977, &[0x2633E]),
        (0x2F978, &[0x7F95]),
        (0x2F979, &[0x7FFA]),
        (0x2F97A, &[0x8005]),
        (0x2F97B, &[0x264DA]),
        (0x2F97C, &[0x26523]),
        (0x2F97D, &[0x8060]),
        (0x2F97E, &[0x265A8]),
        (0x2F97F, &[0x8070]),
        (0x2F980, &[0x2335F]),
        (0x2F981, &[0x43D5]),
        (0x2F982, &[0x80B2]),
        (0x2F983, &[0x8103]),
        (0x2F984, &[0x440B]),
        (0x2F985, &[0x813E]),
        (0x2F986, &[0x5AB5]),
        (0x2F987, &[0x267A7]),
        (0x2F988, &[0x267B5]),
        (0x2F989, &[0x23393]),
        (0x2F98A, &[0x2339C]),
        (0x2F98B, &[0x8201]),
        (0x2F98C, &[0x8204]),
        (0x2F98D, &[0x8F9E]),
        (0x2F98E, &[0x446B]),
        (0x2F98F, &[0x8291]),
        (0x2F990, &[0x828B]),
        (0x2F991, &[0x829D]),
        (0x2F992, &[0x52B3]),
        (0x2F993, &[0x82B1]),
        (0x2F994, &[0x82B3]),
        (0x2F995, &[0x82BD]),
        (0x2F996, &[0x82E6]),
        (0x2F997, &[0x26B3C]),
        (0x2F998, &[0x82E5]),
        (0x2F999, &[0x831D]),
        (0x2F99A, &[0x8363]),
        (0x2F99B, &[0x83AD]),
        (0x2F99C, &[0x8323]),
        (0x2F99D, &[0x83BD]),
        (0x2F99E, &[0x83E7]),
        (0x2F99F, &[0x8457]),
        (0x2F9A0, &[0x8353]),
        (0x2F9A1, &[0x83CA]),
        (0x2F9A2, &[0x83CC]),
        (0x2F9A3, &[0x83DC]),
        (0x2F9A4, &[0x26C36]),
        (0x2F9A5, &[0x26D6B]),
        (0x2F9A6, &[0x26CD5]),
        (0x2F9A7, &[0x452B]),
        (0x2F9A8, &[0x84F1]),
        (0x2F9A9, &[0x84F3]),
        (0x2F9AA, &[0x8516]),
        (0x2F9AB, &[0x273CA]),
        (0x2F9AC, &[0x8564]),
        (0x2F9AD, &[0x26F2C]),
        (0x2F9AE, &[0x455D]),
        (0x2F9AF, &[0x4561]),
        (0x2F9B0, &[0x26FB1]),
        (0x2F9B1, &[0x270D2]),
        (0x2F9B2, &[0x456B]),
        (0x2F9B3, &[0x8650]),
        (0x2F9B4, &[0x865C]),
        (0x2F9B5, &[0x8667]),
        (0x2F9B6, &[0x8669]),
        (0x2F9B7, &[0x86A9]),
        (0x2F9B8, &[0x8688]),
        (0x2F9B9, &[0x870E]),
        (0x2F9BA, &[0x86E2]),
        (0x2F9BB, &[0x8779]),
        (0x2F9BC, &[0x8728]),
        (0x2F9BD, &[0x876B]),
        (0x2F9BE, &[0x8786]),
        (0x2F9BF, &[0x45D7]),
        (0x2F9C0, &[0x87E1]),
        (0x2F9C1, &[0x8801]),
        (0x2F9C2, &[0x45F9]),
        (0x2F9C3, &[0x8860]),
        (0x2F9C4, &[0x8863]),
        (0x2F9C5, &[0x27667]),
        (0x2F9C6, &[0x88D7]),
        (0x2F9C7, &[0x88DE]),
        (0x2F9C8, &[0x4635]),
        (0x2F9C9, &[0x88FA]),
        (0x2F9CA, &[0x34BB]),
        (0x2F9CB, &[0x278AE]),
        (0x2F9CC, &[0x27966]),
        (0x2F9CD, &[0x46BE]),
        (0x2F9CE, &[0x46C7]),
        (0x2F9CF, &[0x8AA0]),
        (0x2F9D0, &[0x8AED]),
        (0x2F9D1, &[0x8B8A]),
        (0x2F9D2, &[0x8C55]),
        (0x2F9D3, &[0x27CA8]),
        (0x2F9D4, &[0x8CAB]),
        (0x2F9D5, &[0x8CC1]),
        (0x2F9D6, &[0x8D1B]),
        (0x2F9D7, &[0x8D77]),
        (0x2F9D8, &[0x27F2F]),
        (0x2F9D9, &[0x20804]),
        (0x2F9DA, &[0x8DCB]),
        (0x2F9DB, &[0x8DBC]),
        (0x2F9DC, &[0x8DF0]),
        (0x2F9DD, &[0x208DE]),
        (0x2F9DE, &[0x8ED4]),
        (0x2F9DF, &[0x8F38]),
        (0x2F9E0, &[0x285D2]),
        (0x2F9E1, &[0x285ED]),
        (0x2F9E2, &[0x9094]),
        (0x2F9E3, &[0x90F1]),
        (0x2F9E4, &[0x9111]),
        (0x2F9E5, &[0x2872E]),
        (0x2F9E6, &[0x911B]),
        (0x2F9E7, &[0x9238]),
        (0x2F9E8, &[0x92D7]),
        (0x2F9E9, &[0x92D8]),
        (0x2F9EA, &[0x927C]),
        (0x2F9EB, &[0x93F9]),
        (0x2F9EC, &[0x9415]),
        (0x2F9ED, &[0x28BFA]),
        (0x2F9EE, &[0x958B]),
        (0x2F9EF, &[0x4995]),
        (0x2F9F0, &[0x95B7]),
        (0x2F9F1, &[0x28D77]),
        (0x2F9F2, &[0x49E6]),
        (0x2F9F3, &[0x96C3]),
        (0x2F9F4, &[0x5DB2]),
        (0x2F9F5, &[0x9723]),
        (0x2F9F6, &[0x29145]),
        (0x2F9F7, &[0x2921A]),
        (0x2F9F8, &[0x4A6E]),
        (0x2F9F9, &[0x4A76]),
        (0x2F9FA, &[0x97E0]),
        (0x2F9FB, &[0x2940A]),
        (0x2F9FC, &[0x4AB2]),
        (0x2F9FD, &[0x29496]),
        (0x2F9FE, &[0x980B]),
        (0x2F9FF, &[0x980B]),
        (0x2FA00, &[0x9829]),
        (0x2FA01, &[0x295B6]),
        (0x2FA02, &[0x98E2]),
        (0x2FA03, &[0x4B33]),
        (0x2FA04, &[0x9929]),
        (0x2FA05, &[0x99A7]),
        (0x2FA06, &[0x99C2]),
        (0x2FA07, &[0x99FE]),
        (0x2FA08, &[0x4BCE]),
        (0x2FA09, &[0x29B30]),
        (0x2FA0A, &[0x9B12]),
        (0x2FA0B, &[0x9C40]),
        (0x2FA0C, &[0x9CFD]),
        (0x2FA0D, &[0x4CCE]),
        (0x2FA0E, &[0x4CED]),
        (0x2FA0F, &[0x9D67]),
        (0x2FA10, &[0x2A0CE]),
        (0x2FA11, &[0x4CF8]),
        (0x2FA12, &[0x2A105]),
        (0x2FA13, &[0x2A20E]),
        (0x2FA14, &[0x2A291]),
        (0x2FA15, &[0x9EBB]),
        (0x2FA16, &[0x4D56]),
        (0x2FA17, &[0x9EF9]),
        (0x2FA18, &[0x9EFE]),
        (0x2FA19, &[0x9F05]),
        (0x2FA1A, &[0x9F0F]),
        (0x2FA1B, &[0x9F16]),
        (0x2FA1C, &[0x9F3B]),
        (0x2FA1D, &[0x2A600]),
    ];

    pub(crate) const COMPATIBILITY_DECOMPOSITION: &[(u32, &[u32])] = &[
        (0x00A0, &[0x0020]),
        (0x00A8, &[0x0020, 0x0308]),
        (0x00AA, &[0x0061]),
        (0x00AF, &[0x0020, 0x0304]),
        (0x00B2, &[0x0032]),
        (0x00B3, &[0x0033]),
        (0x00B4, &[0x0020, 0x0301]),
        (0x00B5, &[0x03BC]),
        (0x00B8, &[0x0020, 0x0327]),
        (0x00B9, &[0x0031]),
        (0x00BA, &[0x006F]),
        (0x00BC, &[0x0031, 0x2044, 0x0034]),
        (0x00BD, &[0x0031, 0x2044, 0x0032]),
        (0x00BE, &[0x0033, 0x2044, 0x0034]),
        (0x0132, &[0x0049, 0x004A]),
        (0x0133, &[0x0069, 0x006A]),
        (0x013F, &[0x004C, 0x00B7]),
        (0x0140, &[0x006C, 0x00B7]),
        (0x0149, &[0x02BC, 0x006E]),
        (0x017F, &[0x0073]),
        (0x01C4, &[0x0044, 0x017D]),
        (0x01C5, &[0x0044, 0x017E]),
        (0x01C6, &[0x0064, 0x017E]),
        (0x01C7, &[0x004C, 0x004A]),
        (0x01C8, &[0x004C, 0x006A]),
        (0x01C9, &[0x006C, 0x006A]),
        (0x01CA, &[0x004E, 0x004A]),
        (0x01CB, &[0x004E, 0x006A]),
        (0x01CC, &[0x006E, 0x006A]),
        (0x01F1, &[0x0044, 0x005A]),
        (0x01F2, &[0x0044, 0x007A]),
        (0x01F3, &[0x0064, 0x007A]),
        (0x02B0, &[0x0068]),
        (0x02B1, &[0x0266]),
        (0x02B2, &[0x006A]),
        (0x02B3, &[0x0072]),
        (0x02B4, &[0x0279]),
        (0x02B5, &[0x027B]),
        (0x02B6, &[0x0281]),
        (0x02B7, &[0x0077]),
        (0x02B8, &[0x0079]),
        (0x02D8, &[0x0020, 0x0306]),
        (0x02D9, &[0x0020, 0x0307]),
        (0x02DA, &[0x0020, 0x030A]),
        (0x02DB, &[0x0020, 0x0328]),
        (0x02DC, &[0x0020, 0x0303]),
        (0x02DD, &[0x0020, 0x030B]),
        (0x02E0, &[0x0263]),
        (0x02E1, &[0x006C]),
        (0x02E2, &[0x0073]),
        (0x02E3, &[0x0078]),
        (0x02E4, &[0x0295]),
        (0x037A, &[0x0020, 0x0345]),
        (0x0384, &[0x0020, 0x0301]),
        (0x03D0, &[0x03B2]),
        (0x03D1, &[0x03B8]),
        (0x03D2, &[0x03A5]),
        (0x03D5, &[0x03C6]),
        (0x03D6, &[0x03C0]),
        (0x03F0, &[0x03BA]),
        (0x03F1, &[0x03C1]),
        (0x03F2, &[0x03C2]),
        (0x03F4, &[0x0398]),
        (0x03F5, &[0x03B5]),
        (0x03F9, &[0x03A3]),
        (0x0587, &[0x0565, 0x0582]),
        (0x0675, &[0x0627, 0x0674]),
        (0x0676, &[0x0648, 0x0674]),
        (0x0677, &[0x06C7, 0x0674]),
        (0x0678, &[0x064A, 0x0674]),
        (0x0E33, &[0x0E4D, 0x0E32]),
        (0x0EB3, &[0x0ECD, 0x0EB2]),
        (0x0EDC, &[0x0EAB, 0x0E99]),
        (0x0EDD, &[0x0EAB, 0x0EA1]),
        (0x0F0C, &[0x0F0B]),
        (0x0F77, &[0x0FB2, 0x0F81]),
        (0x0F79, &[0x0FB3, 0x0F81]),
        (0x10FC, &[0x10DC]),
        (0x1D2C, &[0x0041]),
        (0x1D2D, &[0x00C6]),
        (0x1D2E, &[0x0042]),
        (0x1D30, &[0x0044]),
        (0x1D31, &[0x0045]),
        (0x1D32, &[0x018E]),
        (0x1D33, &[0x0047]),
        (0x1D34, &[0x0048]),
        (0x1D35, &[0x0049]),
        (0x1D36, &[0x004A]),
        (0x1D37, &[0x004B]),
        (0x1D38, &[0x004C]),
        (0x1D39, &[0x004D]),
        (0x1D3A, &[0x004E]),
        (0x1D3C, &[0x004F]),
        (0x1D3D, &[0x0222]),
        (0x1D3E, &[0x0050]),
        (0x1D3F, &[0x0052]),
        (0x1D40, &[0x0054]),
        (0x1D41, &[0x0055]),
        (0x1D42, &[0x0057]),
        (0x1D43, &[0x0061]),
        (0x1D44, &[0x0250]),
        (0x1D45, &[0x0251]),
        (0x1D46, &[0x1D02]),
        (0x1D47, &[0x0062]),
        (0x1D48, &[0x0064]),
        (0x1D49, &[0x0065]),
        (0x1D4A, &[0x0259]),
        (0x1D4B, &[0x025B]),
        (0x1D4C, &[0x025C]),
        (0x1D4D, &[0x0067]),
        (0x1D4F, &[0x006B]),
        (0x1D50, &[0x006D]),
        (0x1D51, &[0x014B]),
        (0x1D52, &[0x006F]),
        (0x1D53, &[0x0254]),
        (0x1D54, &[0x1D16]),
        (0x1D55, &[0x1D17]),
        (0x1D56, &[0x0070]),
        (0x1D57, &[0x0074]),
        (0x1D58, &[0x0075]),
        (0x1D59, &[0x1D1D]),
        (0x1D5A, &[0x026F]),
        (0x1D5B, &[0x0076]),
        (0x1D5C, &[0x1D25]),
        (0x1D5D, &[0x03B2]),
        (0x1D5E, &[0x03B3]),
        (0x1D5F, &[0x03B4]),
        (0x1D60, &[0x03C6]),
        (0x1D61, &[0x03C7]),
        (0x1D62, &[0x0069]),
        (0x1D63, &[0x0072]),
        (0x1D64, &[0x0075]),
        (0x1D65, &[0x0076]),
        (0x1D66, &[0x03B2]),
        (0x1D67, &[0x03B3]),
        (0x1D68, &[0x03C1]),
        (0x1D69, &[0x03C6]),
        (0x1D6A, &[0x03C7]),
        (0x1D78, &[0x043D]),
        (0x1D9B, &[0x0252]),
        (0x1D9C, &[0x0063]),
        (0x1D9D, &[0x0255]),
        (0x1D9E, &[0x00F0]),
        (0x1D9F, &[0x025C]),
        (0x1DA0, &[0x0066]),
        (0x1DA1, &[0x025F]),
        (0x1DA2, &[0x0261]),
        (0x1DA3, &[0x0265]),
        (0x1DA4, &[0x0268]),
        (0x1DA5, &[0x0269]),
        (0x1DA6, &[0x026A]),
        (0x1DA7, &[0x1D7B]),
        (0x1DA8, &[0x029D]),
        (0x1DA9, &[0x026D]),
        (0x1DAA, &[0x1D85]),
        (0x1DAB, &[0x029F]),
        (0x1DAC, &[0x0271]),
        (0x1DAD, &[0x0270]),
        (0x1DAE, &[0x0272]),
        (0x1DAF, &[0x0273]),
        (0x1DB0, &[0x0274]),
        (0x1DB1, &[0x0275]),
        (0x1DB2, &[0x0278]),
        (0x1DB3, &[0x0282]),
        (0x1DB4, &[0x0283]),
        (0x1DB5, &[0x01AB]),
        (0x1DB6, &[0x0289]),
        (0x1DB7, &[0x028A]),
        (0x1DB8, &[0x1D1C]),
        (0x1DB9, &[0x028B]),
        (0x1DBA, &[0x028C]),
        (0x1DBB, &[0x007A]),
        (0x1DBC, &[0x0290]),
        (0x1DBD, &[0x0291]),
        (0x1DBE, &[0x0292]),
        (0x1DBF, &[0x03B8]),
        (0x1E9A, &[0x0061, 0x02BE]),
        (0x1FBD, &[0x0020, 0x0313]),
        (0x1FBF, &[0x0020, 0x0313]),
        (0x1FC0, &[0x0020, 0x0342]),
        (0x1FFE, &[0x0020, 0x0314]),
        (0x2002, &[0x0020]),
        (0x2003, &[0x0020]),
        (0x2004, &[0x0020]),
        (0x2005, &[0x0020]),
        (0x2006, &[0x0020]),
        (0x2007, &[0x0020]),
        (0x2008, &[0x0020]),
        (0x2009, &[0x0020]),
        (0x200A, &[0x0020]),
        (0x2011, &[0x2010]),
        (0x2017, &[0x0020, 0x0333]),
        (0x2024, &[0x002E]),
        (0x2025, &[0x002E, 0x002E]),
        (0x2026, &[0x002E, 0x002E, 0x002E]),
        (0x202F, &[0x0020]),
        (0x2033, &[0x2032, 0x2032]),
        (0x2034, &[0x2032, 0x2032, 0x2032]),
        (0x2036, &[0x2035, 0x2035]),
        (0x2037, &[0x2035, 0x2035, 0x2035]),
        (0x203C, &[0x0021, 0x0021]),
        (0x203E, &[0x0020, 0x0305]),
        (0x2047, &[0x003F, 0x003F]),
        (0x2048, &[0x003F, 0x0021]),
        (0x2049, &[0x0021, 0x003F]),
        (0x2057, &[0x2032, 0x2032, 0x2032, 0x2032]),
        (0x205F, &[0x0020]),
        (0x2070, &[0x0030]),
        (0x2071, &[0x0069]),
        (0x2074, &[0x0034]),
        (0x2075, &[0x0035]),
        (0x2076, &[0x0036]),
        (0x2077, &[0x0037]),
        (0x2078, &[0x0038]),
        (0x2079, &[0x0039]),
        (0x207A, &[0x002B]),
        (0x207B, &[0x2212]),
        (0x207C, &[0x003D]),
        (0x207D, &[0x0028]),
        (0x207E, &[0x0029]),
        (0x207F, &[0x006E]),
        (0x2080, &[0x0030]),
        (0x2081, &[0x0031]),
        (0x2082, &[0x0032]),
        (0x2083, &[0x0033]),
        (0x2084, &[0x0034]),
        (0x2085, &[0x0035]),
        (0x2086, &[0x0036]),
        (0x2087, &[0x0037]),
        (0x2088, &[0x0038]),
        (0x2089, &[0x0039]),
        (0x208A, &[0x002B]),
        (0x208B, &[0x2212]),
        (0x208C, &[0x003D]),
        (0x208D, &[0x0028]),
        (0x208E, &[0x0029]),
        (0x2090, &[0x0061]),
        (0x2091, &[0x0065]),
        (0x2092, &[0x006F]),
        (0x2093, &[0x0078]),
        (0x2094, &[0x0259]),
        (0x2095, &[0x0068]),
        (0x2096, &[0x006B]),
        (0x2097, &[0x006C]),
        (0x2098, &[0x006D]),
        (0x2099, &[0x006E]),
        (0x209A, &[0x0070]),
        (0x209B, &[0x0073]),
        (0x209C, &[0x0074]),
        (0x20A8, &[0x0052, 0x0073]),
        (0x2100, &[0x0061, 0x002F, 0x0063]),
        (0x2101, &[0x0061, 0x002F, 0x0073]),
        (0x2102, &[0x0043]),
        (0x2103, &[0x00B0, 0x0043]),
        (0x2105, &[0x0063, 0x002F, 0x006F]),
        (0x2106, &[0x0063, 0x002F, 0x0075]),
        (0x2107, &[0x0190]),
        (0x2109, &[0x00B0, 0x0046]),
        (0x210A, &[0x0067]),
        (0x210B, &[0x0048]),
        (0x210C, &[0x0048]),
        (0x210D, &[0x0048]),
        (0x210E, &[0x0068]),
        (0x210F, &[0x0127]),
        (0x2110, &[0x0049]),
        (0x2111, &[0x0049]),
        (0x2112, &[0x004C]),
        (0x2113, &[0x006C]),
        (0x2115, &[0x004E]),
        (0x2116, &[0x004E, 0x006F]),
        (0x2119, &[0x0050]),
        (0x211A, &[0x0051]),
        (0x211B, &[0x0052]),
        (0x211C, &[0x0052]),
        (0x211D, &[0x0052]),
        (0x2120, &[0x0053, 0x004D]),
        (0x2121, &[0x0054, 0x0045, 0x004C]),
        (0x2122, &[0x0054, 0x004D]),
        (0x2124, &[0x005A]),
        (0x2128, &[0x005A]),
        (0x212C, &[0x0042]),
        (0x212D, &[0x0043]),
        (0x212F, &[0x0065]),
        (0x2130, &[0x0045]),
        (0x2131, &[0x0046]),
        (0x2133, &[0x004D]),
        (0x2134, &[0x006F]),
        (0x2135, &[0x05D0]),
        (0x2136, &[0x05D1]),
        (0x2137, &[0x05D2]),
        (0x2138, &[0x05D3]),
        (0x2139, &[0x0069]),
        (0x213B, &[0x0046, 0x0041, 0x0058]),
        (0x213C, &[0x03C0]),
        (0x213D, &[0x03B3]),
        (0x213E, &[0x0393]),
        (0x213F, &[0x03A0]),
        (0x2140, &[0x2211]),
        (0x2145, &[0x0044]),
        (0x2146, &[0x0064]),
        (0x2147, &[0x0065]),
        (0x2148, &[0x0069]),
        (0x2149, &[0x006A]),
        (0x2150, &[0x0031, 0x2044, 0x0037]),
        (0x2151, &[0x0031, 0x2044, 0x0039]),
        (0x2152, &[0x0031, 0x2044, 0x0031, 0x0030]),
        (0x2153, &[0x0031, 0x2044, 0x0033]),
        (0x2154, &[0x0032, 0x2044, 0x0033]),
        (0x2155, &[0x0031, 0x2044, 0x0035]),
        (0x2156, &[0x0032, 0x2044, 0x0035]),
        (0x2157, &[0x0033, 0x2044, 0x0035]),
        (0x2158, &[0x0034, 0x2044, 0x0035]),
        (0x2159, &[0x0031, 0x2044, 0x0036]),
        (0x215A, &[0x0035, 0x2044, 0x0036]),
        (0x215B, &[0x0031, 0x2044, 0x0038]),
        (0x215C, &[0x0033, 0x2044, 0x0038]),
        (0x215D, &[0x0035, 0x2044, 0x0038]),
        (0x215E, &[0x0037, 0x2044, 0x0038]),
        (0x215F, &[0x0031, 0x2044]),
        (0x2160, &[0x0049]),
        (0x2161, &[0x0049, 0x0049]),
        (0x2162, &[0x0049, 0x0049, 0x0049]),
        (0x2163, &[0x0049, 0x0056]),
        (0x2164, &[0x0056]),
        (0x2165, &[0x0056, 0x0049]),
        (0x2166, &[0x0056, 0x0049, 0x0049]),
        (0x2167, &[0x0056, 0x0049, 0x0049, 0x0049]),
        (0x2168, &[0x0049, 0x0058]),
        (0x2169, &[0x0058]),
        (0x216A, &[0x0058, 0x0049]),
        (0x216B, &[0x0058, 0x0049, 0x0049]),
        (0x216C, &[0x004C]),
        (0x216D, &[0x0043]),
        (0x216E, &[0x0044]),
        (0x216F, &[0x004D]),
        (0x2170, &[0x0069]),
        (0x2171, &[0x0069, 0x0069]),
        (0x2172, &[0x0069, 0x0069, 0x0069]),
        (0x2173, &[0x0069, 0x0076]),
        (0x2174, &[0x0076]),
        (0x2175, &[0x0076, 0x0069]),
        (0x2176, &[0x0076, 0x0069, 0x0069]),
        (0x2177, &[0x0076, 0x0069, 0x0069, 0x0069]),
        (0x2178, &[0x0069, 0x0078]),
        (0x2179, &[0x0078]),
        (0x217A, &[0x0078, 0x0069]),
        (0x217B, &[0x0078, 0x0069, 0x0069]),
        (0x217C, &[0x006C]),
        (0x217D, &[0x0063]),
        (0x217E, &[0x0064]),
        (0x217F, &[0x006D]),
        (0x2189, &[0x0030, 0x2044, 0x0033]),
        (0x222C, &[0x222B, 0x222B]),
        (0x222D, &[0x222B, 0x222B, 0x222B]),
        (0x222F, &[0x222E, 0x222E]),
        (0x2230, &[0x222E, 0x222E, 0x222E]),
        (0x2460, &[0x0031]),
        (0x2461, &[0x0032]),
        (0x2462, &[0x0033]),
        (0x2463, &[0x0034]),
        (0x2464, &[0x0035]),
        (0x2465, &[0x0036]),
        (0x2466, &[0x0037]),
        (0x2467, &[0x0038]),
        (0x2468, &[0x0039]),
        (0x2469, &[0x0031, 0x0030]),
        (0x246A, &[0x0031, 0x0031]),
        (0x246B, &[0x0031, 0x0032]),
        (0x246C, &[0x0031, 0x0033]),
        (0x246D, &[0x0031, 0x0034]),
        (0x246E, &[0x0031, 0x0035]),
        (0x246F, &[0x0031, 0x0036]),
        (0x2470, &[0x0031, 0x0037]),
        (0x2471, &[0x0031, 0x0038]),
        (0x2472, &[0x0031, 0x0039]),
        (0x2473, &[0x0032, 0x0030]),
        (0x2474, &[0x0028, 0x0031, 0x0029]),
        (0x2475, &[0x0028, 0x0032, 0x0029]),
        (0x2476, &[0x0028, 0x0033, 0x0029]),
        (0x2477, &[0x0028, 0x0034, 0x0029]),
        (0x2478, &[0x0028, 0x0035, 0x0029]),
        (0x2479, &[0x0028, 0x0036, 0x0029]),
        (0x247A, &[0x0028, 0x0037, 0x0029]),
        (0x247B, &[0x0028, 0x0038, 0x0029]),
        (0x247C, &[0x0028, 0x0039, 0x0029]),
        (0x247D, &[0x0028, 0x0031, 0x0030, 0x0029]),
        (0x247E, &[0x0028, 0x0031, 0x0031, 0x0029]),
        (0x247F, &[0x0028, 0x0031, 0x0032, 0x0029]),
        (0x2480, &[0x0028, 0x0031, 0x0033, 0x0029]),
        (0x2481, &[0x0028, 0x0031, 0x0034, 0x0029]),
        (0x2482, &[0x0028, 0x0031, 0x0035, 0x0029]),
        (0x2483, &[0x0028, 0x0031, 0x0036, 0x0029]),
        (0x2484, &[0x0028, 0x0031, 0x0037, 0x0029]),
        (0x2485, &[0x0028, 0x0031, 0x0038, 0x0029]),
        (0x2486, &[0x0028, 0x0031, 0x0039, 0x0029]),
        (0x2487, &[0x0028, 0x0032, 0x0030, 0x0029]),
        (0x2488, &[0x0031, 0x002E]),
        (0x2489, &[0x0032, 0x002E]),
        (0x248A, &[0x0033, 0x002E]),
        (0x248B, &[0x0034, 0x002E]),
        (0x248C, &[0x0035, 0x002E]),
        (0x248D, &[0x0036, 0x002E]),
        (0x248E, &[0x0037, 0x002E]),
        (0x248F, &[0x0038, 0x002E]),
        (0x2490, &[0x0039, 0x002E]),
        (0x2491, &[0x0031, 0x0030, 0x002E]),
        (0x2492, &[0x0031, 0x0031, 0x002E]),
        (0x2493, &[0x0031, 0x0032, 0x002E]),
        (0x2494, &[0x0031, 0x0033, 0x002E]),
        (0x2495, &[0x0031, 0x0034, 0x002E]),
        (0x2496, &[0x0031, 0x0035, 0x002E]),
        (0x2497, &[0x0031, 0x0036, 0x002E]),
        (0x2498, &[0x0031, 0x0037, 0x002E]),
        (0x2499, &[0x0031, 0x0038, 0x002E]),
        (0x249A, &[0x0031, 0x0039, 0x002E]),
        (0x249B, &[0x0032, 0x0030, 0x002E]),
        (0x249C, &[0x0028, 0x0061, 0x0029]),
        (0x249D, &[0x0028, 0x0062, 0x0029]),
        (0x249E, &[0x0028, 0x0063, 0x0029]),
        (0x249F, &[0x0028, 0x0064, 0x0029]),
        (0x24A0, &[0x0028, 0x0065, 0x0029]),
        (0x24A1, &[0x0028, 0x0066, 0x0029]),
        (0x24A2, &[0x0028, 0x0067, 0x0029]),
        (0x24A3, &[0x0028, 0x0068, 0x0029]),
        (0x24A4, &[0x0028, 0x0069, 0x0029]),
        (0x24A5, &[0x0028, 0x006A, 0x0029]),
        (0x24A6, &[0x0028, 0x006B, 0x0029]),
        (0x24A7, &[0x0028, 0x006C, 0x0029]),
        (0x24A8, &[0x0028, 0x006D, 0x0029]),
        (0x24A9, &[0x0028, 0x006E, 0x0029]),
        (0x24AA, &[0x0028, 0x006F, 0x0029]),
        (0x24AB, &[0x0028, 0x0070, 0x0029]),
        (0x24AC, &[0x0028, 0x0071, 0x0029]),
        (0x24AD, &[0x0028, 0x0072, 0x0029]),
        (0x24AE, &[0x0028, 0x0073, 0x0029]),
        (0x24AF, &[0x0028, 0x0074, 0x0029]),
        (0x24B0, &[0x0028, 0x0075, 0x0029]),
        (0x24B1, &[0x0028, 0x0076, 0x0029]),
        (0x24B2, &[0x0028, 0x0077, 0x0029]),
        (0x24B3, &[0x0028, 0x0078, 0x0029]),
        (0x24B4, &[0x0028, 0x0079, 0x0029]),
        (0x24B5, &[0x0028, 0x007A, 0x0029]),
        (0x24B6, &[0x0041]),
        (0x24B7, &[0x0042]),
        (0x24B8, &[0x0043]),
        (0x24B9, &[0x0044]),
        (0x24BA, &[0x0045]),
        (0x24BB, &[0x0046]),
        (0x24BC, &[0x0047]),
        (0x24BD, &[0x0048]),
        (0x24BE, &[0x0049]),
        (0x24BF, &[0x004A]),
        (0x24C0, &[0x004B]),
        (0x24C1, &[0x004C]),
        (0x24C2, &[0x004D]),
        (0x24C3, &[0x004E]),
        (0x24C4, &[0x004F]),
        (0x24C5, &[0x0050]),
        (0x24C6, &[0x0051]),
        (0x24C7, &[0x0052]),
        (0x24C8, &[0x0053]),
        (0x24C9, &[0x0054]),
        (0x24CA, &[0x0055]),
        (0x24CB, &[0x0056]),
        (0x24CC, &[0x0057]),
        (0x24CD, &[0x0058]),
        (0x24CE, &[0x0059]),
        (0x24CF, &[0x005A]),
        (0x24D0, &[0x0061]),
        (0x24D1, &[0x0062]),
        (0x24D2, &[0x0063]),
        (0x24D3, &[0x0064]),
        (0x24D4, &[0x0065]),
        (0x24D5, &[0x0066]),
        (0x24D6, &[0x0067]),
        (0x24D7, &[0x0068]),
        (0x24D8, &[0x0069]),
        (0x24D9, &[0x006A]),
        (0x24DA, &[0x006B]),
        (0x24DB, &[0x006C]),
        (0x24DC, &[0x006D]),
        (0x24DD, &[0x006E]),
        (0x24DE, &[0x006F]),
        (0x24DF, &[0x0070]),
        (0x24E0, &[0x0071]),
        (0x24E1, &[0x0072]),
        (0x24E2, &[0x0073]),
        (0x24E3, &[0x0074]),
        (0x24E4, &[0x0075]),
        (0x24E5, &[0x0076]),
        (0x24E6, &[0x0077]),
        (0x24E7, &[0x0078]),
        (0x24E8, &[0x0079]),
        (0x24E9, &[0x007A]),
        (0x24EA, &[0x0030]),
        (0x2A0C, &[0x222B, 0x222B, 0x222B, 0x222B]),
        (0x2A74, &[0x003A, 0x003A, 0x003D]),
        (0x2A75, &[0x003D, 0x003D]),
        (0x2A76, &[0x003D, 0x003D, 0x003D]),
        (0x2C7C, &[0x006A]),
        (0x2C7D, &[0x0056]),
        (0x2D6F, &[0x2D61]),
        (0x2E9F, &[0x6BCD]),
        (0x2EF3, &[0x9F9F]),
        (0x2F00, &[0x4E00]),
        (0x2F01, &[0x4E28]),
        (0x2F02, &[0x4E36]),
        (0x2F03, &[0x4E3F]),
        (0x2F04, &[0x4E59]),
        (0x2F05, &[0x4E85]),
        (0x2F06, &[0x4E8C]),
        (0x2F07, &[0x4EA0]),
        (0x2F08, &[0x4EBA]),
        (0x2F09, &[0x513F]),
        (0x2F0A, &[0x5165]),
        (0x2F0B, &[0x516B]),
        (0x2F0C, &[0x5182]),
        (0x2F0D, &[0x5196]),
        (0x2F0E, &[0x51AB]),
        (0x2F0F, &[0x51E0]),
        (0x2F10, &[0x51F5]),
        (0x2F11, &[0x5200]),
        (0x2F12, &[0x529B]),
        (0x2F13, &[0x52F9]),
        (0x2F14, &[0x5315]),
        (0x2F15, &[0x531A]),
        (0x2F16, &[0x5338]),
        (0x2F17, &[0x5341]),
        (0x2F18, &[0x535C]),
        (0x2F19, &[0x5369]),
        (0x2F1A, &[0x5382]),
        (0x2F1B, &[0x53B6]),
        (0x2F1C, &[0x53C8]),
        (0x2F1D, &[0x53E3]),
        (0x2F1E, &[0x56D7]),
        (0x2F1F, &[0x571F]),
        (0x2F20, &[0x58EB]),
        (0x2F21, &[0x5902]),
        (0x2F22, &[0x590A]),
        (0x2F23, &[0x5915]),
        (0x2F24, &[0x5927]),
        (0x2F25, &[0x5973]),
        (0x2F26, &[0x5B50]),
        (0x2F27, &[0x5B80]),
        (0x2F28, &[0x5BF8]),
        (0x2F29, &[0x5C0F]),
        (0x2F2A, &[0x5C22]),
        (0x2F2B, &[0x5C38]),
        (0x2F2C, &[0x5C6E]),
        (0x2F2D, &[0x5C71]),
        (0x2F2E, &[0x5DDB]),
        (0x2F2F, &[0x5DE5]),
        (0x2F30, &[0x5DF1]),
        (0x2F31, &[0x5DFE]),
        (0x2F32, &[0x5E72]),
        (0x2F33, &[0x5E7A]),
        (0x2F34, &[0x5E7F]),
        (0x2F35, &[0x5EF4]),
        (0x2F36, &[0x5EFE]),
        (0x2F37, &[0x5F0B]),
        (0x2F38, &[0x5F13]),
        (0x2F39, &[0x5F50]),
        (0x2F3A, &[0x5F61]),
        (0x2F3B, &[0x5F73]),
        (0x2F3C, &[0x5FC3]),
        (0x2F3D, &[0x6208]),
        (0x2F3E, &[0x6236]),
        (0x2F3F, &[0x624B]),
        (0x2F40, &[0x652F]),
        (0x2F41, &[0x6534]),
        (0x2F42, &[0x6587]),
        (0x2F43, &[0x6597]),
        (0x2F44, &[0x65A4]),
        (0x2F45, &[0x65B9]),
        (0x2F46, &[0x65E0]),
        (0x2F47, &[0x65E5]),
        (0x2F48, &[0x66F0]),
        (0x2F49, &[0x6708]),
        (0x2F4A, &[0x6728]),
        (0x2F4B, &[0x6B20]),
        (0x2F4C, &[0x6B62]),
        (0x2F4D, &[0x6B79]),
        (0x2F4E, &[0x6BB3]),
        (0x2F4F, &[0x6BCB]),
        (0x2F50, &[0x6BD4]),
        (0x2F51, &[0x6BDB]),
        (0x2F52, &[0x6C0F]),
        (0x2F53, &[0x6C14]),
        (0x2F54, &[0x6C34]),
        (0x2F55, &[0x706B]),
        (0x2F56, &[0x722A]),
        (0x2F57, &[0x7236]),
        (0x2F58, &[0x723B]),
        (0x2F59, &[0x723F]),
        (0x2F5A, &[0x7247]),
        (0x2F5B, &[0x7259]),
        (0x2F5C, &[0x725B]),
        (0x2F5D, &[0x72AC]),
        (0x2F5E, &[0x7384]),
        (0x2F5F, &[0x7389]),
        (0x2F60, &[0x74DC]),
        (0x2F61, &[0x74E6]),
        (0x2F62, &[0x7518]),
        (0x2F63, &[0x751F]),
        (0x2F64, &[0x7528]),
        (0x2F65, &[0x7530]),
        (0x2F66, &[0x758B]),
        (0x2F67, &[0x7592]),
        (0x2F68, &[0x7676]),
        (0x2F69, &[0x767D]),
        (0x2F6A, &[0x76AE]),
        (0x2F6B, &[0x76BF]),
        (0x2F6C, &[0x76EE]),
        (0x2F6D, &[0x77DB]),
        (0x2F6E, &[0x77E2]),
        (0x2F6F, &[0x77F3]),
        (0x2F70, &[0x793A]),
        (0x2F71, &[0x79B8]),
        (0x2F72, &[0x79BE]),
        (0x2F73, &[0x7A74]),
        (0x2F74, &[0x7ACB]),
        (0x2F75, &[0x7AF9]),
        (0x2F76, &[0x7C73]),
        (0x2F77, &[0x7CF8]),
        (0x2F78, &[0x7F36]),
        (0x2F79, &[0x7F51]),
        (0x2F7A, &[0x7F8A]),
        (0x2F7B, &[0x7FBD]),
        (0x2F7C, &[0x8001]),
        (0x2F7D, &[0x800C]),
        (0x2F7E, &[0x8012]),
        (0x2F7F, &[0x8033]),
        (0x2F80, &[0x807F]),
        (0x2F81, &[0x8089]),
        (0x2F82, &[0x81E3]),
        (0x2F83, &[0x81EA]),
        (0x2F84, &[0x81F3]),
        (0x2F85, &[0x81FC]),
        (0x2F86, &[0x820C]),
        (0x2F87, &[0x821B]),
        (0x2F88, &[0x821F]),
        (0x2F89, &[0x826E]),
        (0x2F8A, &[0x8272]),
        (0x2F8B, &[0x8278]),
        (0x2F8C, &[0x864D]),
        (0x2F8D, &[0x866B]),
        (0x2F8E, &[0x8840]),
        (0x2F8F, &[0x884C]),
        (0x2F90, &[0x8863]),
        (0x2F91, &[0x897E]),
        (0x2F92, &[0x898B]),
        (0x2F93, &[0x89D2]),
        (0x2F94, &[0x8A00]),
        (0x2F95, &[0x8C37]),
        (0x2F96, &[0x8C46]),
        (0x2F97, &[0x8C55]),
        (0x2F98, &[0x8C78]),
        (0x2F99, &[0x8C9D]),
        (0x2F9A, &[0x8D64]),
        (0x2F9B, &[0x8D70]),
        (0x2F9C, &[0x8DB3]),
        (0x2F9D, &[0x8EAB]),
        (0x2F9E, &[0x8ECA]),
        (0x2F9F, &[0x8F9B]),
        (0x2FA0, &[0x8FB0]),
        (0x2FA1, &[0x8FB5]),
        (0x2FA2, &[0x9091]),
        (0x2FA3, &[0x9149]),
        (0x2FA4, &[0x91C6]),
        (0x2FA5, &[0x91CC]),
        (0x2FA6, &[0x91D1]),
        (0x2FA7, &[0x9577]),
        (0x2FA8, &[0x9580]),
        (0x2FA9, &[0x961C]),
        (0x2FAA, &[0x96B6]),
        (0x2FAB, &[0x96B9]),
        (0x2FAC, &[0x96E8]),
        (0x2FAD, &[0x9751]),
        (0x2FAE, &[0x975E]),
        (0x2FAF, &[0x9762]),
        (0x2FB0, &[0x9769]),
        (0x2FB1, &[0x97CB]),
        (0x2FB2, &[0x97ED]),
        (0x2FB3, &[0x97F3]),
        (0x2FB4, &[0x9801]),
        (0x2FB5, &[0x98A8]),
        (0x2FB6, &[0x98DB]),
        (0x2FB7, &[0x98DF]),
        (0x2FB8, &[0x9996]),
        (0x2FB9, &[0x9999]),
        (0x2FBA, &[0x99AC]),
        (0x2FBB, &[0x9AA8]),
        (0x2FBC, &[0x9AD8]),
        (0x2FBD, &[0x9ADF]),
        (0x2FBE, &[0x9B25]),
        (0x2FBF, &[0x9B2F]),
        (0x2FC0, &[0x9B32]),
        (0x2FC1, &[0x9B3C]),
        (0x2FC2, &[0x9B5A]),
        (0x2FC3, &[0x9CE5]),
        (0x2FC4, &[0x9E75]),
        (0x2FC5, &[0x9E7F]),
        (0x2FC6, &[0x9EA5]),
        (0x2FC7, &[0x9EBB]),
        (0x2FC8, &[0x9EC3]),
        (0x2FC9, &[0x9ECD]),
        (0x2FCA, &[0x9ED1]),
        (0x2FCB, &[0x9EF9]),
        (0x2FCC, &[0x9EFD]),
        (0x2FCD, &[0x9F0E]),
        (0x2FCE, &[0x9F13]),
        (0x2FCF, &[0x9F20]),
        (0x2FD0, &[0x9F3B]),
        (0x2FD1, &[0x9F4A]),
        (0x2FD2, &[0x9F52]),
        (0x2FD3, &[0x9F8D]),
        (0x2FD4, &[0x9F9C]),
        (0x2FD5, &[0x9FA0]),
        (0x3000, &[0x0020]),
        (0x3036, &[0x3012]),
        (0x3038, &[0x5341]),
        (0x3039, &[0x5344]),
        (0x303A, &[0x5345]),
        (0x309B, &[0x0020, 0x3099]),
        (0x309C, &[0x0020, 0x309A]),
        (0x309F, &[0x3088, 0x308A]),
        (0x30FF, &[0x30B3, 0x30C8]),
        (0x3131, &[0x1100]),
        (0x3132, &[0x1101]),
        (0x3133, &[0x11AA]),
        (0x3134, &[0x1102]),
        (0x3135, &[0x11AC]),
        (0x3136, &[0x11AD]),
        (0x3137, &[0x1103]),
        (0x3138, &[0x1104]),
        (0x3139, &[0x1105]),
        (0x313A, &[0x11B0]),
        (0x313B, &[0x11B1]),
        (0x313C, &[0x11B2]),
        (0x313D, &[0x11B3]),
        (0x313E, &[0x11B4]),
        (0x313F, &[0x11B5]),
        (0x3140, &[0x111A]),
        (0x3141, &[0x1106]),
        (0x3142, &[0x1107]),
        (0x3143, &[0x1108]),
        (0x3144, &[0x1121]),
        (0x3145, &[0x1109]),
        (0x3146, &[0x110A]),
        (0x3147, &[0x110B]),
        (0x3148, &[0x110C]),
        (0x3149, &[0x110D]),
        (0x314A, &[0x110E]),
        (0x314B, &[0x110F]),
        (0x314C, &[0x1110]),
        (0x314D, &[0x1111]),
        (0x314E, &[0x1112]),
        (0x314F, &[0x1161]),
        (0x3150, &[0x1162]),
        (0x3151, &[0x1163]),
        (0x3152, &[0x1164]),
        (0x3153, &[0x1165]),
        (0x3154, &[0x1166]),
        (0x3155, &[0x1167]),
        (0x3156, &[0x1168]),
        (0x3157, &[0x1169]),
        (0x3158, &[0x116A]),
        (0x3159, &[0x116B]),
        (0x315A, &[0x116C]),
        (0x315B, &[0x116D]),
        (0x315C, &[0x116E]),
        (0x315D, &[0x116F]),
        (0x315E, &[0x1170]),
        (0x315F, &[0x1171]),
        (0x3160, &[0x1172]),
        (0x3161, &[0x1173]),
        (0x3162, &[0x1174]),
        (0x3163, &[0x1175]),
        (0x3164, &[0x1160]),
        (0x3165, &[0x1114]),
        (0x3166, &[0x1115]),
        (0x3167, &[0x11C7]),
        (0x3168, &[0x11C8]),
        (0x3169, &[0x11CC]),
        (0x316A, &[0x11CE]),
        (0x316B, &[0x11D3]),
        (0x316C, &[0x11D7]),
        (0x316D, &[0x11D9]),
        (0x316E, &[0x111C]),
        (0x316F, &[0x11DD]),
        (0x3170, &[0x11DF]),
        (0x3171, &[0x111D]),
        (0x3172, &[0x111E]),
        (0x3173, &[0x1120]),
        (0x3174, &[0x1122]),
        (0x3175, &[0x1123]),
        (0x3176, &[0x1127]),
        (0x3177, &[0x1129]),
        (0x3178, &[0x112B]),
        (0x3179, &[0x112C]),
        (0x317A, &[0x112D]),
        (0x317B, &[0x112E]),
        (0x317C, &[0x112F]),
        (0x317D, &[0x1132]),
        (0x317E, &[0x1136]),
        (0x317F, &[0x1140]),
        (0x3180, &[0x1147]),
        (0x3181, &[0x114C]),
        (0x3182, &[0x11F1]),
        (0x3183, &[0x11F2]),
        (0x3184, &[0x1157]),
        (0x3185, &[0x1158]),
        (0x3186, &[0x1159]),
        (0x3187, &[0x1184]),
        (0x3188, &[0x1185]),
        (0x3189, &[0x1188]),
        (0x318A, &[0x1191]),
        (0x318B, &[0x1192]),
        (0x318C, &[0x1194]),
        (0x318D, &[0x119E]),
        (0x318E, &[0x11A1]),
        (0x3192, &[0x4E00]),
        (0x3193, &[0x4E8C]),
        (0x3194, &[0x4E09]),
        (0x3195, &[0x56DB]),
        (0x3196, &[0x4E0A]),
        (0x3197, &[0x4E2D]),
        (0x3198, &[0x4E0B]),
        (0x3199, &[0x7532]),
        (0x319A, &[0x4E59]),
        (0x319B, &[0x4E19]),
        (0x319C, &[0x4E01]),
        (0x319D, &[0x5929]),
        (0x319E, &[0x5730]),
        (0x319F, &[0x4EBA]),
        (0x3200, &[0x0028, 0x1100, 0x0029]),
        (0x3201, &[0x0028, 0x1102, 0x0029]),
        (0x3202, &[0x0028, 0x1103, 0x0029]),
        (0x3203, &[0x0028, 0x1105, 0x0029]),
        (0x3204, &[0x0028, 0x1106, 0x0029]),
        (0x3205, &[0x0028, 0x1107, 0x0029]),
        (0x3206, &[0x0028, 0x1109, 0x0029]),
        (0x3207, &[0x0028, 0x110B, 0x0029]),
        (0x3208, &[0x0028, 0x110C, 0x0029]),
        (0x3209, &[0x0028, 0x110E, 0x0029]),
        (0x320A, &[0x0028, 0x110F, 0x0029]),
        (0x320B, &[0x0028, 0x1110, 0x0029]),
        (0x320C, &[0x0028, 0x1111, 0x0029]),
        (0x320D, &[0x0028, 0x1112, 0x0029]),
        (0x320E, &[0x0028, 0x1100, 0x1161, 0x0029]),
        (0x320F, &[0x0028, 0x1102, 0x1161, 0x0029]),
        (0x3210, &[0x0028, 0x1103, 0x1161, 0x0029]),
        (0x3211, &[0x0028, 0x1105, 0x1161, 0x0029]),
        (0x3212, &[0x0028, 0x1106, 0x1161, 0x0029]),
        (0x3213, &[0x0028, 0x1107, 0x1161, 0x0029]),
        (0x3214, &[0x0028, 0x1109, 0x1161, 0x0029]),
        (0x3215, &[0x0028, 0x110B, 0x1161, 0x0029]),
        (0x3216, &[0x0028, 0x110C, 0x1161, 0x0029]),
        (0x3217, &[0x0028, 0x110E, 0x1161, 0x0029]),
        (0x3218, &[0x0028, 0x110F, 0x1161, 0x0029]),
        (0x3219, &[0x0028, 0x1110, 0x1161, 0x0029]),
        (0x321A, &[0x0028, 0x1111, 0x1161, 0x0029]),
        (0x321B, &[0x0028, 0x1112, 0x1161, 0x0029]),
        (0x321C, &[0x0028, 0x110C, 0x116E, 0x0029]),
        (0x321D, &[0x0028, 0x110B, 0x1169, 0x110C, 0x1165, 0x11AB, 0x0029]),
        (0x321E, &[0x0028, 0x110B, 0x1169, 0x1112, 0x116E, 0x0029]),
        (0x3220, &[0x0028, 0x4E00, 0x0029]),
        (0x3221, &[0x0028, 0x4E8C, 0x0029]),
        (0x3222, &[0x0028, 0x4E09, 0x0029]),
        (0x3223, &[0x0028, 0x56DB, 0x0029]),
        (0x3224, &[0x0028, 0x4E94, 0x0029]),
        (0x3225, &[0x0028, 0x516D, 0x0029]),
        (0x3226, &[0x0028, 0x4E03, 0x0029]),
        (0x3227, &[0x0028, 0x516B, 0x0029]),
        (0x3228, &[0x0028, 0x4E5D, 0x0029]),
        (0x3229, &[0x0028, 0x5341, 0x0029]),
        (0x322A, &[0x0028, 0x6708, 0x0029]),
        (0x322B, &[0x0028, 0x706B, 0x0029]),
        (0x322C, &[0x0028, 0x6C34, 0x0029]),
        (0x322D, &[0x0028, 0x6728, 0x0029]),
        (0x322E, &[0x0028, 0x91D1, 0x0029]),
        (0x322F, &[0x0028, 0x571F, 0x0029]),
        (0x3230, &[0x0028, 0x65E5, 0x0029]),
        (0x3231, &[0x0028, 0x682A, 0x0029]),
        (0x3232, &[0x0028, 0x6709, 0x0029]),
        (0x3233, &[0x0028, 0x793E, 0x0029]),
        (0x3234, &[0x0028, 0x540D, 0x0029]),
        (0x3235, &[0x0028, 0x7279, 0x0029]),
        (0x3236, &[0x0028, 0x8CA1, 0x0029]),
        (0x3237, &[0x0028, 0x795D, 0x0029]),
        (0x3238, &[0x0028, 0x52B4, 0x0029]),
        (0x3239, &[0x0028, 0x4EE3, 0x0029]),
        (0x323A, &[0x0028, 0x547C, 0x0029]),
        (0x323B, &[0x0028, 0x5B66, 0x0029]),
        (0x323C, &[0x0028, 0x76E3, 0x0029]),
        (0x323D, &[0x0028, 0x4F01, 0x0029]),
        (0x323E, &[0x0028, 0x8CC7, 0x0029]),
        (0x323F, &[0x0028, 0x5354, 0x0029]),
        (0x3240, &[0x0028, 0x796D, 0x0029]),
        (0x3241, &[0x0028, 0x4F11, 0x0029]),
        (0x3242, &[0x0028, 0x81EA, 0x0029]),
        (0x3243, &[0x0028, 0x81F3, 0x0029]),
        (0x3244, &[0x554F]),
        (0x3245, &[0x5E7C]),
        (0x3246, &[0x6587]),
        (0x3247, &[0x7B8F]),
        (0x3250, &[0x0050, 0x0054, 0x0045]),
        (0x3251, &[0x0032, 0x0031]),
        (0x3252, &[0x0032, 0x0032]),
        (0x3253, &[0x0032, 0x0033]),
        (0x3254, &[0x0032, 0x0034]),
        (0x3255, &[0x0032, 0x0035]),
        (0x3256, &[0x0032, 0x0036]),
        (0x3257, &[0x0032, 0x0037]),
        (0x3258, &[0x0032, 0x0038]),
        (0x3259, &[0x0032, 0x0039]),
        (0x325A, &[0x0033, 0x0030]),
        (0x325B, &[0x0033, 0x0031]),
        (0x325C, &[0x0033, 0x0032]),
        (0x325D, &[0x0033, 0x0033]),
        (0x325E, &[0x0033, 0x0034]),
        (0x325F, &[0x0033, 0x0035]),
        (0x3260, &[0x1100]),
        (0x3261, &[0x1102]),
        (0x3262, &[0x1103]),
        (0x3263, &[0x1105]),
        (0x3264, &[0x1106]),
        (0x3265, &[0x1107]),
        (0x3266, &[0x1109]),
        (0x3267, &[0x110B]),
        (0x3268, &[0x110C]),
        (0x3269, &[0x110E]),
        (0x326A, &[0x110F]),
        (0x326B, &[0x1110]),
        (0x326C, &[0x1111]),
        (0x326D, &[0x1112]),
        (0x326E, &[0x1100, 0x1161]),
        (0x326F, &[0x1102, 0x1161]),
        (0x3270, &[0x1103, 0x1161]),
        (0x3271, &[0x1105, 0x1161]),
        (0x3272, &[0x1106, 0x1161]),
        (0x3273, &[0x1107, 0x1161]),
        (0x3274, &[0x1109, 0x1161]),
        (0x3275, &[0x110B, 0x1161]),
        (0x3276, &[0x110C, 0x1161]),
        (0x3277, &[0x110E, 0x1161]),
        (0x3278, &[0x110F, 0x1161]),
        (0x3279, &[0x1110, 0x1161]),
        (0x327A, &[0x1111, 0x1161]),
        (0x327B, &[0x1112, 0x1161]),
        (0x327C, &[0x110E, 0x1161, 0x11B7, 0x1100, 0x1169]),
        (0x327D, &[0x110C, 0x116E, 0x110B, 0x1174]),
        (0x327E, &[0x110B, 0x116E]),
        (0x3280, &[0x4E00]),
        (0x3281, &[0x4E8C]),
        (0x3282, &[0x4E09]),
        (0x3283, &[0x56DB]),
        (0x3284, &[0x4E94]),
        (0x3285, &[0x516D]),
        (0x3286, &[0x4E03]),
        (0x3287, &[0x516B]),
        (0x3288, &[0x4E5D]),
        (0x3289, &[0x5341]),
        (0x328A, &[0x6708]),
        (0x328B, &[0x706B]),
        (0x328C, &[0x6C34]),
        (0x328D, &[0x6728]),
        (0x328E, &[0x91D1]),
        (0x328F, &[0x571F]),
        (0x3290, &[0x65E5]),
        (0x3291, &[0x682A]),
        (0x3292, &[0x6709]),
        (0x3293, &[0x793E]),
        (0x3294, &[0x540D]),
        (0x3295, &[0x7279]),
        (0x3296, &[0x8CA1]),
        (0x3297, &[0x795D]),
        (0x3298, &[0x52B4]),
        (0x3299, &[0x79D8]),
        (0x329A, &[0x7537]),
        (0x329B, &[0x5973]),
        (0x329C, &[0x9069]),
        (0x329D, &[0x512A]),
        (0x329E, &[0x5370]),
        (0x329F, &[0x6CE8]),
        (0x32A0, &[0x9805]),
        (0x32A1, &[0x4F11]),
        (0x32A2, &[0x5199]),
        (0x32A3, &[0x6B63]),
        (0x32A4, &[0x4E0A]),
        (0x32A5, &[0x4E2D]),
        (0x32A6, &[0x4E0B]),
        (0x32A7, &[0x5DE6]),
        (0x32A8, &[0x53F3]),
        (0x32A9, &[0x533B]),
        (0x32AA, &[0x5B97]),
        (0x32AB, &[0x5B66]),
        (0x32AC, &[0x76E3]),
        (0x32AD, &[0x4F01]),
        (0x32AE, &[0x8CC7]),
        (0x32AF, &[0x5354]),
        (0x32B0, &[0x591C]),
        (0x32B1, &[0x0033, 0x0036]),
        (0x32B2, &[0x0033, 0x0037]),
        (0x32B3, &[0x0033, 0x0038]),
        (0x32B4, &[0x0033, 0x0039]),
        (0x32B5, &[0x0034, 0x0030]),
        (0x32B6, &[0x0034, 0x0031]),
        (0x32B7, &[0x0034, 0x0032]),
        (0x32B8, &[0x0034, 0x0033]),
        (0x32B9, &[0x0034, 0x0034]),
        (0x32BA, &[0x0034, 0x0035]),
        (0x32BB, &[0x0034, 0x0036]),
        (0x32BC, &[0x0034, 0x0037]),
        (0x32BD, &[0x0034, 0x0038]),
        (0x32BE, &[0x0034, 0x0039]),
        (0x32BF, &[0x0035, 0x0030]),
        (0x32C0, &[0x0031, 0x6708]),
        (0x32C1, &[0x0032, 0x6708]),
        (0x32C2, &[0x0033, 0x6708]),
        (0x32C3, &[0x0034, 0x6708]),
        (0x32C4, &[0x0035, 0x6708]),
        (0x32C5, &[0x0036, 0x6708]),
        (0x32C6, &[0x0037, 0x6708]),
        (0x32C7, &[0x0038, 0x6708]),
        (0x32C8, &[0x0039, 0x6708]),
        (0x32C9, &[0x0031, 0x0030, 0x6708]),
        (0x32CA, &[0x0031, 0x0031, 0x6708]),
        (0x32CB, &[0x0031, 0x0032, 0x6708]),
        (0x32CC, &[0x0048, 0x0067]),
        (0x32CD, &[0x0065, 0x0072, 0x0067]),
        (0x32CE, &[0x0065, 0x0056]),
        (0x32CF, &[0x004C, 0x0054, 0x0044]),
        (0x32D0, &[0x30A2]),
        (0x32D1, &[0x30A4]),
        (0x32D2, &[0x30A6]),
        (0x32D3, &[0x30A8]),
        (0x32D4, &[0x30AA]),
        (0x32D5, &[0x30AB]),
        (0x32D6, &[0x30AD]),
        (0x32D7, &[0x30AF]),
        (0x32D8, &[0x30B1]),
        (0x32D9, &[0x30B3]),
        (0x32DA, &[0x30B5]),
        (0x32DB, &[0x30B7]),
        (0x32DC, &[0x30B9]),
        (0x32DD, &[0x30BB]),
        (0x32DE, &[0x30BD]),
        (0x32DF, &[0x30BF]),
        (0x32E0, &[0x30C1]),
        (0x32E1, &[0x30C4]),
        (0x32E2, &[0x30C6]),
        (0x32E3, &[0x30C8]),
        (0x32E4, &[0x30CA]),
        (0x32E5, &[0x30CB]),
        (0x32E6, &[0x30CC]),
        (0x32E7, &[0x30CD]),
        (0x32E8, &[0x30CE]),
        (0x32E9, &[0x30CF]),
        (0x32EA, &[0x30D2]),
        (0x32EB, &[0x30D5]),
        (0x32EC, &[0x30D8]),
        (0x32ED, &[0x30DB]),
        (0x32EE, &[0x30DE]),
        (0x32EF, &[0x30DF]),
        (0x32F0, &[0x30E0]),
        (0x32F1, &[0x30E1]),
        (0x32F2, &[0x30E2]),
        (0x32F3, &[0x30E4]),
        (0x32F4, &[0x30E6]),
        (0x32F5, &[0x30E8]),
        (0x32F6, &[0x30E9]),
        (0x32F7, &[0x30EA]),
        (0x32F8, &[0x30EB]),
        (0x32F9, &[0x30EC]),
        (0x32FA, &[0x30ED]),
        (0x32FB, &[0x30EF]),
        (0x32FC, &[0x30F0]),
        (0x32FD, &[0x30F1]),
        (0x32FE, &[0x30F2]),
        (0x32FF, &[0x4EE4, 0x548C]),
        (0x3300, &[0x30A2, 0x30D1, 0x30FC, 0x30C8]),
        (0x3301, &[0x30A2, 0x30EB, 0x30D5, 0x30A1]),
        (0x3302, &[0x30A2, 0x30F3, 0x30DA, 0x30A2]),
        (0x3303, &[0x30A2, 0x30FC, 0x30EB]),
        (0x3304, &[0x30A4, 0x30CB, 0x30F3, 0x30B0]),
        (0x3305, &[0x30A4, 0x30F3, 0x30C1]),
        (0x3306, &[0x30A6, 0x30A9, 0x30F3]),
        (0x3307, &[0x30A8, 0x30B9, 0x30AF, 0x30FC, 0x30C9]),
        (0x3308, &[0x30A8, 0x30FC, 0x30AB, 0x30FC]),
        (0x3309, &[0x30AA, 0x30F3, 0x30B9]),
        (0x330A, &[0x30AA, 0x30FC, 0x30E0]),
        (0x330B, &[0x30AB, 0x30A4, 0x30EA]),
        (0x330C, &[0x30AB, 0x30E9, 0x30C3, 0x30C8]),
        (0x330D, &[0x30AB, 0x30ED, 0x30EA, 0x30FC]),
        (0x330E, &[0x30AC, 0x30ED, 0x30F3]),
        (0x330F, &[0x30AC, 0x30F3, 0x30DE]),
        (0x3310, &[0x30AE, 0x30AC]),
        (0x3311, &[0x30AE, 0x30CB, 0x30FC]),
        (0x3312, &[0x30AD, 0x30E5, 0x30EA, 0x30FC]),
        (0x3313, &[0x30AE, 0x30EB, 0x30C0, 0x30FC]),
        (0x3314, &[0x30AD, 0x30ED]),
        (0x3315, &[0x30AD, 0x30ED, 0x30B0, 0x30E9, 0x30E0]),
        (0x3316, &[0x30AD, 0x30ED, 0x30E1, 0x30FC, 0x30C8, 0x30EB]),
        (0x3317, &[0x30AD, 0x30ED, 0x30EF, 0x30C3, 0x30C8]),
        (0x3318, &[0x30B0, 0x30E9, 0x30E0]),
        (0x3319, &[0x30B0, 0x30E9, 0x30E0, 0x30C8, 0x30F3]),
        (0x331A, &[0x30AF, 0x30EB, 0x30BC, 0x30A4, 0x30ED]),
        (0x331B, &[0x30AF, 0x30ED, 0x30FC, 0x30CD]),
        (0x331C, &[0x30B1, 0x30FC, 0x30B9]),
        (0x331D, &[0x30B3, 0x30EB, 0x30CA]),
        (0x331E, &[0x30B3, 0x30FC, 0x30DD]),
        (0x331F, &[0x30B5, 0x30A4, 0x30AF, 0x30EB]),
        (0x3320, &[0x30B5, 0x30F3, 0x30C1, 0x30FC, 0x30E0]),
        (0x3321, &[0x30B7, 0x30EA, 0x30F3, 0x30B0]),
        (0x3322, &[0x30BB, 0x30F3, 0x30C1]),
        (0x3323, &[0x30BB, 0x30F3, 0x30C8]),
        (0x3324, &[0x30C0, 0x30FC, 0x30B9]),
        (0x3325, &[0x30C7, 0x30B7]),
        (0x3326, &[0x30C9, 0x30EB]),
        (0x3327, &[0x30C8, 0x30F3]),
        (0x3328, &[0x30CA, 0x30CE]),
        (0x3329, &[0x30CE, 0x30C3, 0x30C8]),
        (0x332A, &[0x30CF, 0x30A4, 0x30C4]),
        (0x332B, &[0x30D1, 0x30FC, 0x30BB, 0x30F3, 0x30C8]),
        (0x332C, &[0x30D1, 0x30FC, 0x30C4]),
        (0x332D, &[0x30D0, 0x30FC, 0x30EC, 0x30EB]),
        (0x332E, &[0x30D4, 0x30A2, 0x30B9, 0x30C8, 0x30EB]),
        (0x332F, &[0x30D4, 0x30AF, 0x30EB]),
        (0x3330, &[0x30D4, 0x30B3]),
        (0x3331, &[0x30D3, 0x30EB]),
        (0x3332, &[0x30D5, 0x30A1, 0x30E9, 0x30C3, 0x30C9]),
        (0x3333, &[0x30D5, 0x30A3, 0x30FC, 0x30C8]),
        (0x3334, &[0x30D6, 0x30C3, 0x30B7, 0x30A7, 0x30EB]),
        (0x3335, &[0x30D5, 0x30E9, 0x30F3]),
        (0x3336, &[0x30D8, 0x30AF, 0x30BF, 0x30FC, 0x30EB]),
        (0x3337, &[0x30DA, 0x30BD]),
        (0x3338, &[0x30DA, 0x30CB, 0x30D2]),
        (0x3339, &[0x30D8, 0x30EB, 0x30C4]),
        (0x333A, &[0x30DA, 0x30F3, 0x30B9]),
        (0x333B, &[0x30DA, 0x30FC, 0x30B8]),
        (0x333C, &[0x30D9, 0x30FC, 0x30BF]),
        (0x333D, &[0x30DD, 0x30A4, 0x30F3, 0x30C8]),
        (0x333E, &[0x30DC, 0x30EB, 0x30C8]),
        (0x333F, &[0x30DB, 0x30F3]),
        (0x3340, &[0x30DD, 0x30F3, 0x30C9]),
        (0x3341, &[0x30DB, 0x30FC, 0x30EB]),
        (0x3342, &[0x30DB, 0x30FC, 0x30F3]),
        (0x3343, &[0x30DE, 0x30A4, 0x30AF, 0x30ED]),
        (0x3344, &[0x30DE, 0x30A4, 0x30EB]),
        (0x3345, &[0x30DE, 0x30C3, 0x30CF]),
        (0x3346, &[0x30DE, 0x30EB, 0x30AF]),
        (0x3347, &[0x30DE, 0x30F3, 0x30B7, 0x30E7, 0x30F3]),
        (0x3348, &[0x30DF, 0x30AF, 0x30ED, 0x30F3]),
        (0x3349, &[0x30DF, 0x30EA]),
        (0x334A, &[0x30DF, 0x30EA, 0x30D0, 0x30FC, 0x30EB]),
        (0x334B, &[0x30E1, 0x30AC]),
        (0x334C, &[0x30E1, 0x30AC, 0x30C8, 0x30F3]),
        (0x334D, &[0x30E1, 0x30FC, 0x30C8, 0x30EB]),
        (0x334E, &[0x30E4, 0x30FC, 0x30C9]),
        (0x334F, &[0x30E4, 0x30FC, 0x30EB]),
        (0x3350, &[0x30E6, 0x30A2, 0x30F3]),
        (0x3351, &[0x30EA, 0x30C3, 0x30C8, 0x30EB]),
        (0x3352, &[0x30EA, 0x30E9]),
        (0x3353, &[0x30EB, 0x30D4, 0x30FC]),
        (0x3354, &[0x30EB, 0x30FC, 0x30D6, 0x30EB]),
        (0x3355, &[0x30EC, 0x30E0]),
        (0x3356, &[0x30EC, 0x30F3, 0x30C8, 0x30B2, 0x30F3]),
        (0x3357, &[0x30EF, 0x30C3, 0x30C8]),
        (0x3358, &[0x0030, 0x70B9]),
        (0x3359, &[0x0031, 0x70B9]),
        (0x335A, &[0x0032, 0x70B9]),
        (0x335B, &[0x0033, 0x70B9]),
        (0x335C, &[0x0034, 0x70B9]),
        (0x335D, &[0x0035, 0x70B9]),
        (0x335E, &[0x0036, 0x70B9]),
        (0x335F, &[0x0037, 0x70B9]),
        (0x3360, &[0x0038, 0x70B9]),
        (0x3361, &[0x0039, 0x70B9]),
        (0x3362, &[0x0031, 0x0030, 0x70B9]),
        (0x3363, &[0x0031, 0x0031, 0x70B9]),
        (0x3364, &[0x0031, 0x0032, 0x70B9]),
        (0x3365, &[0x0031, 0x0033, 0x70B9]),
        (0x3366, &[0x0031, 0x0034, 0x70B9]),
        (0x3367, &[0x0031, 0x0035, 0x70B9]),
        (0x3368, &[0x0031, 0x0036, 0x70B9]),
        (0x3369, &[0x0031, 0x0037, 0x70B9]),
        (0x336A, &[0x0031, 0x0038, 0x70B9]),
        (0x336B, &[0x0031, 0x0039, 0x70B9]),
        (0x336C, &[0x0032, 0x0030, 0x70B9]),
        (0x336D, &[0x0032, 0x0031, 0x70B9]),
        (0x336E, &[0x0032, 0x0032, 0x70B9]),
        (0x336F, &[0x0032, 0x0033, 0x70B9]),
        (0x3370, &[0x0032, 0x0034, 0x70B9]),
        (0x3371, &[0x0068, 0x0050, 0x0061]),
        (0x3372, &[0x0064, 0x0061]),
        (0x3373, &[0x0041, 0x0055]),
        (0x3374, &[0x0062, 0x0061, 0x0072]),
        (0x3375, &[0x006F, 0x0056]),
        (0x3376, &[0x0070, 0x0063]),
        (0x3377, &[0x0064, 0x006D]),
        (0x3378, &[0x0064, 0x006D, 0x00B2]),
        (0x3379, &[0x0064, 0x006D, 0x00B3]),
        (0x337A, &[0x0049, 0x0055]),
        (0x337B, &[0x5E73, 0x6210]),
        (0x337C, &[0x662D, 0x548C]),
        (0x337D, &[0x5927, 0x6B63]),
        (0x337E, &[0x660E, 0x6CBB]),
        (0x337F, &[0x682A, 0x5F0F, 0x4F1A, 0x793E]),
        (0x3380, &[0x0070, 0x0041]),
        (0x3381, &[0x006E, 0x0041]),
        (0x3382, &[0x03BC, 0x0041]),
        (0x3383, &[0x006D, 0x0041]),
        (0x3384, &[0x006B, 0x0041]),
        (0x3385, &[0x004B, 0x0042]),
        (0x3386, &[0x004D, 0x0042]),
        (0x3387, &[0x0047, 0x0042]),
        (0x3388, &[0x0063, 0x0061, 0x006C]),
        (0x3389, &[0x006B, 0x0063, 0x0061, 0x006C]),
        (0x338A, &[0x0070, 0x0046]),
        (0x338B, &[0x006E, 0x0046]),
        (0x338C, &[0x03BC, 0x0046]),
        (0x338D, &[0x03BC, 0x0067]),
        (0x338E, &[0x006D, 0x0067]),
        (0x338F, &[0x006B, 0x0067]),
        (0x3390, &[0x0048, 0x007A]),
        (0x3391, &[0x006B, 0x0048, 0x007A]),
        (0x3392, &[0x004D, 0x0048, 0x007A]),
        (0x3393, &[0x0047, 0x0048, 0x007A]),
        (0x3394, &[0x0054, 0x0048, 0x007A]),
        (0x3395, &[0x03BC, 0x2113]),
        (0x3396, &[0x006D, 0x2113]),
        (0x3397, &[0x0064, 0x2113]),
        (0x3398, &[0x006B, 0x2113]),
        (0x3399, &[0x0066, 0x006D]),
        (0x339A, &[0x006E, 0x006D]),
        (0x339B, &[0x03BC, 0x006D]),
        (0x339C, &[0x006D, 0x006D]),
        (0x339D, &[0x0063, 0x006D]),
        (0x339E, &[0x006B, 0x006D]),
        (0x339F, &[0x006D, 0x006D, 0x00B2]),
        (0x33A0, &[0x0063, 0x006D, 0x00B2]),
        (0x33A1, &[0x006D, 0x00B2]),
        (0x33A2, &[0x006B, 0x006D, 0x00B2]),
        (0x33A3, &[0x006D, 0x006D, 0x00B3]),
        (0x33A4, &[0x0063, 0x006D, 0x00B3]),
        (0x33A5, &[0x006D, 0x00B3]),
        (0x33A6, &[0x006B, 0x006D, 0x00B3]),
        (0x33A7, &[0x006D, 0x2215, 0x0073]),
        (0x33A8, &[0x006D, 0x2215, 0x0073, 0x00B2]),
        (0x33A9, &[0x0050, 0x0061]),
        (0x33AA, &[0x006B, 0x0050, 0x0061]),
        (0x33AB, &[0x004D, 0x0050, 0x0061]),
        (0x33AC, &[0x0047, 0x0050, 0x0061]),
        (0x33AD, &[0x0072, 0x0061, 0x0064]),
        (0x33AE, &[0x0072, 0x0061, 0x0064, 0x2215, 0x0073]),
        (0x33AF, &[0x0072, 0x0061, 0x0064, 0x2215, 0x0073, 0x00B2]),
        (0x33B0, &[0x0070, 0x0073]),
        (0x33B1, &[0x006E, 0x0073]),
        (0x33B2, &[0x03BC, 0x0073]),
        (0x33B3, &[0x006D, 0x0073]),
        (0x33B4, &[0x0070, 0x0056]),
        (0x33B5, &[0x006E, 0x0056]),
        (0x33B6, &[0x03BC, 0x0056]),
        (0x33B7, &[0x006D, 0x0056]),
        (0x33B8, &[0x006B, 0x0056]),
        (0x33B9, &[0x004D, 0x0056]),
        (0x33BA, &[0x0070, 0x0057]),
        (0x33BB, &[0x006E, 0x0057]),
        (0x33BC, &[0x03BC, 0x0057]),
        (0x33BD, &[0x006D, 0x0057]),
        (0x33BE, &[0x006B, 0x0057]),
        (0x33BF, &[0x004D, 0x0057]),
        (0x33C0, &[0x006B, 0x03A9]),
        (0x33C1, &[0x004D, 0x03A9]),
        (0x33C2, &[0x0061, 0x002E, 0x006D, 0x002E]),
        (0x33C3, &[0x0042, 0x0071]),
        (0x33C4, &[0x0063, 0x0063]),
        (0x33C5, &[0x0063, 0x0064]),
        (0x33C6, &[0x0043, 0x2215, 0x006B, 0x0067]),
        (0x33C7, &[0x0043, 0x006F, 0x002E]),
        (0x33C8, &[0x0064, 0x0042]),
        (0x33C9, &[0x0047, 0x0079]),
        (0x33CA, &[0x0068, 0x0061]),
        (0x33CB, &[0x0048, 0x0050]),
        (0x33CC, &[0x0069, 0x006E]),
        (0x33CD, &[0x004B, 0x004B]),
        (0x33CE, &[0x004B, 0x004D]),
        (0x33CF, &[0x006B, 0x0074]),
        (0x33D0, &[0x006C, 0x006D]),
        (0x33D1, &[0x006C, 0x006E]),
        (0x33D2, &[0x006C, 0x006F, 0x0067]),
        (0x33D3, &[0x006C, 0x0078]),
        (0x33D4, &[0x006D, 0x0062]),
        (0x33D5, &[0x006D, 0x0069, 0x006C]),
        (0x33D6, &[0x006D, 0x006F, 0x006C]),
        (0x33D7, &[0x0050, 0x0048]),
        (0x33D8, &[0x0070, 0x002E, 0x006D, 0x002E]),
        (0x33D9, &[0x0050, 0x0050, 0x004D]),
        (0x33DA, &[0x0050, 0x0052]),
        (0x33DB, &[0x0073, 0x0072]),
        (0x33DC, &[0x0053, 0x0076]),
        (0x33DD, &[0x0057, 0x0062]),
        (0x33DE, &[0x0056, 0x2215, 0x006D]),
        (0x33DF, &[0x0041, 0x2215, 0x006D]),
        (0x33E0, &[0x0031, 0x65E5]),
        (0x33E1, &[0x0032, 0x65E5]),
        (0x33E2, &[0x0033, 0x65E5]),
        (0x33E3, &[0x0034, 0x65E5]),
        (0x33E4, &[0x0035, 0x65E5]),
        (0x33E5, &[0x0036, 0x65E5]),
        (0x33E6, &[0x0037, 0x65E5]),
        (0x33E7, &[0x0038, 0x65E5]),
        (0x33E8, &[0x0039, 0x65E5]),
        (0x33E9, &[0x0031, 0x0030, 0x65E5]),
        (0x33EA, &[0x0031, 0x0031, 0x65E5]),
        (0x33EB, &[0x0031, 0x0032, 0x65E5]),
        (0x33EC, &[0x0031, 0x0033, 0x65E5]),
        (0x33ED, &[0x0031, 0x0034, 0x65E5]),
        (0x33EE, &[0x0031, 0x0035, 0x65E5]),
        (0x33EF, &[0x0031, 0x0036, 0x65E5]),
        (0x33F0, &[0x0031, 0x0037, 0x65E5]),
        (0x33F1, &[0x0031, 0x0038, 0x65E5]),
        (0x33F2, &[0x0031, 0x0039, 0x65E5]),
        (0x33F3, &[0x0032, 0x0030, 0x65E5]),
        (0x33F4, &[0x0032, 0x0031, 0x65E5]),
        (0x33F5, &[0x0032, 0x0032, 0x65E5]),
        (0x33F6, &[0x0032, 0x0033, 0x65E5]),
        (0x33F7, &[0x0032, 0x0034, 0x65E5]),
        (0x33F8, &[0x0032, 0x0035, 0x65E5]),
        (0x33F9, &[0x0032, 0x0036, 0x65E5]),
        (0x33FA, &[0x0032, 0x0037, 0x65E5]),
        (0x33FB, &[0x0032, 0x0038, 0x65E5]),
        (0x33FC, &[0x0032, 0x0039, 0x65E5]),
        (0x33FD, &[0x0033, 0x0030, 0x65E5]),
        (0x33FE, &[0x0033, 0x0031, 0x65E5]),
        (0x33FF, &[0x0067, 0x0061, 0x006C]),
        (0xA69C, &[0x044A]),
        (0xA69D, &[0x044C]),
        (0xA770, &[0xA76F]),
        (0xA7F2, &[0x0043]),
        (0xA7F3, &[0x0046]),
        (0xA7F4, &[0x0051]),
        (0xA7F8, &[0x0126]),
        (0xA7F9, &[0x0153]),
        (0xAB5C, &[0xA727]),
        (0xAB5D, &[0xAB37]),
        (0xAB5E, &[0x026B]),
        (0xAB5F, &[0xAB52]),
        (0xAB69, &[0x028D]),
        (0xFB00, &[0x0066, 0x0066]),
        (0xFB01, &[0x0066, 0x0069]),
        (0xFB02, &[0x0066, 0x006C]),
        (0xFB03, &[0x0066, 0x0066, 0x0069]),
        (0xFB04, &[0x0066, 0x0066, 0x006C]),
        (0xFB05, &[0x017F, 0x0074]),
        (0xFB06, &[0x0073, 0x0074]),
        (0xFB13, &[0x0574, 0x0576]),
        (0xFB14, &[0x0574, 0x0565]),
        (0xFB15, &[0x0574, 0x056B]),
        (0xFB16, &[0x057E, 0x0576]),
        (0xFB17, &[0x0574, 0x056D]),
        (0xFB20, &[0x05E2]),
        (0xFB21, &[0x05D0]),
        (0xFB22, &[0x05D3]),
        (0xFB23, &[0x05D4]),
        (0xFB24, &[0x05DB]),
        (0xFB25, &[0x05DC]),
        (0xFB26, &[0x05DD]),
        (0xFB27, &[0x05E8]),
        (0xFB28, &[0x05EA]),
        (0xFB29, &[0x002B]),
        (0xFB4F, &[0x05D0, 0x05DC]),
        (0xFB50, &[0x0671]),
        (0xFB51, &[0x0671]),
        (0xFB52, &[0x067B]),
        (0xFB53, &[0x067B]),
        (0xFB54, &[0x067B]),
        (0xFB55, &[0x067B]),
        (0xFB56, &[0x067E]),
        (0xFB57, &[0x067E]),
        (0xFB58, &[0x067E]),
        (0xFB59, &[0x067E]),
        (0xFB5A, &[0x0680]),
        (0xFB5B, &[0x0680]),
        (0xFB5C, &[0x0680]),
        (0xFB5D, &[0x0680]),
        (0xFB5E, &[0x067A]),
        (0xFB5F, &[0x067A]),
        (0xFB60, &[0x067A]),
        (0xFB61, &[0x067A]),
        (0xFB62, &[0x067F]),
        (0xFB63, &[0x067F]),
        (0xFB64, &[0x067F]),
        (0xFB65, &[0x067F]),
        (0xFB66, &[0x0679]),
        (0xFB67, &[0x0679]),
        (0xFB68, &[0x0679]),
        (0xFB69, &[0x0679]),
        (0xFB6A, &[0x06A4]),
        (0xFB6B, &[0x06A4]),
        (0xFB6C, &[0x06A4]),
        (0xFB6D, &[0x06A4]),
        (0xFB6E, &[0x06A6]),
        (0xFB6F, &[0x06A6]),
        (0xFB70, &[0x06A6]),
        (0xFB71, &[0x06A6]),
        (0xFB72, &[0x0684]),
        (0xFB73, &[0x0684]),
        (0xFB74, &[0x0684]),
        (0xFB75, &[0x0684]),
        (0xFB76, &[0x0683]),
        (0xFB77, &[0x0683]),
        (0xFB78, &[0x0683]),
        (0xFB79, &[0x0683]),
        (0xFB7A, &[0x0686]),
        (0xFB7B, &[0x0686]),
        (0xFB7C, &[0x0686]),
        (0xFB7D, &[0x0686]),
        (0xFB7E, &[0x0687]),
        (0xFB7F, &[0x0687]),
        (0xFB80, &[0x0687]),
        (0xFB81, &[0x0687]),
        (0xFB82, &[0x068D]),
        (0xFB83, &[0x068D]),
        (0xFB84, &[0x068C]),
        (0xFB85, &[0x068C]),
        (0xFB86, &[0x068E]),
        (0xFB87, &[0x068E]),
        (0xFB88, &[0x0688]),
        (0xFB89, &[0x0688]),
        (0xFB8A, &[0x0698]),
        (0xFB8B, &[0x0698]),
        (0xFB8C, &[0x0691]),
        (0xFB8D, &[0x0691]),
        (0xFB8E, &[0x06A9]),
        (0xFB8F, &[0x06A9]),
        (0xFB90, &[0x06A9]),
        (0xFB91, &[0x06A9]),
        (0xFB92, &[0x06AF]),
        (0xFB93, &[0x06AF]),
        (0xFB94, &[0x06AF]),
        (0xFB95, &[0x06AF]),
        (0xFB96, &[0x06B3]),
        (0xFB97, &[0x06B3]),
        (0xFB98, &[0x06B3]),
        (0xFB99, &[0x06B3]),
        (0xFB9A, &[0x06B1]),
        (0xFB9B, &[0x06B1]),
        (0xFB9C, &[0x06B1]),
        (0xFB9D, &[0x06B1]),
        (0xFB9E, &[0x06BA]),
        (0xFB9F, &[0x06BA]),
        (0xFBA0, &[0x06BB]),
        (0xFBA1, &[0x06BB]),
        (0xFBA2, &[0x06BB]),
        (0xFBA3, &[0x06BB]),
        (0xFBA4, &[0x06C0]),
        (0xFBA5, &[0x06C0]),
        (0xFBA6, &[0x06C1]),
        (0xFBA7, &[0x06C1]),
        (0xFBA8, &[0x06C1]),
        (0xFBA9, &[0x06C1]),
        (0xFBAA, &[0x06BE]),
        (0xFBAB, &[0x06BE]),
        (0xFBAC, &[0x06BE]),
        (0xFBAD, &[0x06BE]),
        (0xFBAE, &[0x06D2]),
        (0xFBAF, &[0x06D2]),
        (0xFBB0, &[0x06D3]),
        (0xFBB1, &[0x06D3]),
        (0xFBD3, &[0x06AD]),
        (0xFBD4, &[0x06AD]),
        (0xFBD5, &[0x06AD]),
        (0xFBD6, &[0x06AD]),
        (0xFBD7, &[0x06C7]),
        (0xFBD8, &[0x06C7]),
        (0xFBD9, &[0x06C6]),
        (0xFBDA, &[0x06C6]),
        (0xFBDB, &[0x06C8]),
        (0xFBDC, &[0x06C8]),
        (0xFBDD, &[0x0677]),
        (0xFBDE, &[0x06CB]),
        (0xFBDF, &[0x06CB]),
        (0xFBE0, &[0x06C5]),
        (0xFBE1, &[0x06C5]),
        (0xFBE2, &[0x06C9]),
        (0xFBE3, &[0x06C9]),
        (0xFBE4, &[0x06D0]),
        (0xFBE5, &[0x06D0]),
        (0xFBE6, &[0x06D0]),
        (0xFBE7, &[0x06D0]),
        (0xFBE8, &[0x0649]),
        (0xFBE9, &[0x0649]),
        (0xFBEA, &[0x0626, 0x0627]),
        (0xFBEB, &[0x0626, 0x0627]),
        (0xFBEC, &[0x0626, 0x06D5]),
        (0xFBED, &[0x0626, 0x06D5]),
        (0xFBEE, &[0x0626, 0x0648]),
        (0xFBEF, &[0x0626, 0x0648]),
        (0xFBF0, &[0x0626, 0x06C7]),
        (0xFBF1, &[0x0626, 0x06C7]),
        (0xFBF2, &[0x0626, 0x06C6]),
        (0xFBF3, &[0x0626, 0x06C6]),
        (0xFBF4, &[0x0626, 0x06C8]),
        (0xFBF5, &[0x0626, 0x06C8]),
        (0xFBF6, &[0x0626, 0x06D0]),
        (0xFBF7, &[0x0626, 0x06D0]),
        (0xFBF8, &[0x0626, 0x06D0]),
        (0xFBF9, &[0x0626, 0x0649]),
        (0xFBFA, &[0x0626, 0x0649]),
        (0xFBFB, &[0x0626, 0x0649]),
        (0xFBFC, &[0x06CC]),
        (0xFBFD, &[0x06CC]),
        (0xFBFE, &[0x06CC]),
        (0xFBFF, &[0x06CC]),
        (0xFC00, &[0x0626, 0x062C]),
        (0xFC01, &[0x0626, 0x062D]),
        (0xFC02, &[0x0626, 0x0645]),
        (0xFC03, &[0x0626, 0x0649]),
        (0xFC04, &[0x0626, 0x064A]),
        (0xFC05, &[0x0628, 0x062C]),
        (0xFC06, &[0x0628, 0x062D]),
        (0xFC07, &[0x0628, 0x062E]),
        (0xFC08, &[0x0628, 0x0645]),
        (0xFC09, &[0x0628, 0x0649]),
        (0xFC0A, &[0x0628, 0x064A]),
        (0xFC0B, &[0x062A, 0x062C]),
        (0xFC0C, &[0x062A, 0x062D]),
        (0xFC0D, &[0x062A, 0x062E]),
        (0xFC0E, &[0x062A, 0x0645]),
        (0xFC0F, &[0x062A, 0x0649]),
        (0xFC10, &[0x062A, 0x064A]),
        (0xFC11, &[0x062B, 0x062C]),
        (0xFC12, &[0x062B, 0x0645]),
        (0xFC13, &[0x062B, 0x0649]),
        (0xFC14, &[0x062B, 0x064A]),
        (0xFC15, &[0x062C, 0x062D]),
        (0xFC16, &[0x062C, 0x0645]),
        (0xFC17, &[0x062D, 0x062C]),
        (0xFC18, &[0x062D, 0x0645]),
        (0xFC19, &[0x062E, 0x062C]),
        (0xFC1A, &[0x062E, 0x062D]),
        (0xFC1B, &[0x062E, 0x0645]),
        (0xFC1C, &[0x0633, 0x062C]),
        (0xFC1D, &[0x0633, 0x062D]),
        (0xFC1E, &[0x0633, 0x062E]),
        (0xFC1F, &[0x0633, 0x0645]),
        (0xFC20, &[0x0635, 0x062D]),
        (0xFC21, &[0x0635, 0x0645]),
        (0xFC22, &[0x0636, 0x062C]),
        (0xFC23, &[0x0636, 0x062D]),
        (0xFC24, &[0x0636, 0x062E]),
        (0xFC25, &[0x0636, 0x0645]),
        (0xFC26, &[0x0637, 0x062D]),
        (0xFC27, &[0x0637, 0x0645]),
        (0xFC28, &[0x0638, 0x0645]),
        (0xFC29, &[0x0639, 0x062C]),
        (0xFC2A, &[0x0639, 0x0645]),
        (0xFC2B, &[0x063A, 0x062C]),
        (0xFC2C, &[0x063A, 0x0645]),
        (0xFC2D, &[0x0641, 0x062C]),
        (0xFC2E, &[0x0641, 0x062D]),
        (0xFC2F, &[0x0641, 0x062E]),
        (0xFC30, &[0x0641, 0x0645]),
        (0xFC31, &[0x0641, 0x0649]),
        (0xFC32, &[0x0641, 0x064A]),
        (0xFC33, &[0x0642, 0x062D]),
        (0xFC34, &[0x0642, 0x0645]),
        (0xFC35, &[0x0642, 0x0649]),
        (0xFC36, &[0x0642, 0x064A]),
        (0xFC37, &[0x0643, 0x0627]),
        (0xFC38, &[0x0643, 0x062C]),
        (0xFC39, &[0x0643, 0x062D]),
        (0xFC3A, &[0x0643, 0x062E]),
        (0xFC3B, &[0x0643, 0x0644]),
        (0xFC3C, &[0x0643, 0x0645]),
        (0xFC3D, &[0x0643, 0x0649]),
        (0xFC3E, &[0x0643, 0x064A]),
        (0xFC3F, &[0x0644, 0x062C]),
        (0xFC40, &[0x0644, 0x062D]),
        (0xFC41, &[0x0644, 0x062E]),
        (0xFC42, &[0x0644, 0x0645]),
        (0xFC43, &[0x0644, 0x0649]),
        (0xFC44, &[0x0644, 0x064A]),
        (0xFC45, &[0x0645, 0x062C]),
        (0xFC46, &[0x0645, 0x062D]),
        (0xFC47, &[0x0645, 0x062E]),
        (0xFC48, &[0x0645, 0x0645]),
        (0xFC49, &[0x0645, 0x0649]),
        (0xFC4A, &[0x0645, 0x064A]),
        (0xFC4B, &[0x0646, 0x062C]),
        (0xFC4C, &[0x0646, 0x062D]),
        (0xFC4D, &[0x0646, 0x062E]),
        (0xFC4E, &[0x0646, 0x0645]),
        (0xFC4F, &[0x0646, 0x0649]),
        (0xFC50, &[0x0646, 0x064A]),
        (0xFC51, &[0x0647, 0x062C]),
        (0xFC52, &[0x0647, 0x0645]),
        (0xFC53, &[0x0647, 0x0649]),
        (0xFC54, &[0x0647, 0x064A]),
        (0xFC55, &[0x064A, 0x062C]),
        (0xFC56, &[0x064A, 0x062D]),
        (0xFC57, &[0x064A, 0x062E]),
        (0xFC58, &[0x064A, 0x0645]),
        (0xFC59, &[0x064A, 0x0649]),
        (0xFC5A, &[0x064A, 0x064A]),
        (0xFC5B, &[0x0630, 0x0670]),
        (0xFC5C, &[0x0631, 0x0670]),
        (0xFC5D, &[0x0649, 0x0670]),
        (0xFC5E, &[0x0020, 0x064C, 0x0651]),
        (0xFC5F, &[0x0020, 0x064D, 0x0651]),
        (0xFC60, &[0x0020, 0x064E, 0x0651]),
        (0xFC61, &[0x0020, 0x064F, 0x0651]),
        (0xFC62, &[0x0020, 0x0650, 0x0651]),
        (0xFC63, &[0x0020, 0x0651, 0x0670]),
        (0xFC64, &[0x0626, 0x0631]),
        (0xFC65, &[0x0626, 0x0632]),
        (0xFC66, &[0x0626, 0x0645]),
        (0xFC67, &[0x0626, 0x0646]),
        (0xFC68, &[0x0626, 0x0649]),
        (0xFC69, &[0x0626, 0x064A]),
        (0xFC6A, &[0x0628, 0x0631]),
        (0xFC6B, &[0x0628, 0x0632]),
        (0xFC6C, &[0x0628, 0x0645]),
        (0xFC6D, &[0x0628, 0x0646]),
        (0xFC6E, &[0x0628, 0x0649]),
        (0xFC6F, &[0x0628, 0x064A]),
        (0xFC70, &[0x062A, 0x0631]),
        (0xFC71, &[0x062A, 0x0632]),
        (0xFC72, &[0x062A, 0x0645]),
        (0xFC73, &[0x062A, 0x0646]),
        (0xFC74, &[0x062A, 0x0649]),
        (0xFC75, &[0x062A, 0x064A]),
        (0xFC76, &[0x062B, 0x0631]),
        (0xFC77, &[0x062B, 0x0632]),
        (0xFC78, &[0x062B, 0x0645]),
        (0xFC79, &[0x062B, 0x0646]),
        (0xFC7A, &[0x062B, 0x0649]),
        (0xFC7B, &[0x062B, 0x064A]),
        (0xFC7C, &[0x0641, 0x0649]),
        (0xFC7D, &[0x0641, 0x064A]),
        (0xFC7E, &[0x0642, 0x0649]),
        (0xFC7F, &[0x0642, 0x064A]),
        (0xFC80, &[0x0643, 0x0627]),
        (0xFC81, &[0x0643, 0x0644]),
        (0xFC82, &[0x0643, 0x0645]),
        (0xFC83, &[0x0643, 0x0649]),
        (0xFC84, &[0x0643, 0x064A]),
        (0xFC85, &[0x0644, 0x0645]),
        (0xFC86, &[0x0644, 0x0649]),
        (0xFC87, &[0x0644, 0x064A]),
        (0xFC88, &[0x0645, 0x0627]),
        (0xFC89, &[0x0645, 0x0645]),
        (0xFC8A, &[0x0646, 0x0631]),
        (0xFC8B, &[0x0646, 0x0632]),
        (0xFC8C, &[0x0646, 0x0645]),
        (0xFC8D, &[0x0646, 0x0646]),
        (0xFC8E, &[0x0646, 0x0649]),
        (0xFC8F, &[0x0646, 0x064A]),
        (0xFC90, &[0x0649, 0x0670]),
        (0xFC91, &[0x064A, 0x0631]),
        (0xFC92, &[0x064A, 0x0632]),
        (0xFC93, &[0x064A, 0x0645]),
        (0xFC94, &[0x064A, 0x0646]),
        (0xFC95, &[0x064A, 0x0649]),
        (0xFC96, &[0x064A, 0x064A]),
        (0xFC97, &[0x0626, 0x062C]),
        (0xFC98, &[0x0626, 0x062D]),
        (0xFC99, &[0x0626, 0x062E]),
        (0xFC9A, &[0x0626, 0x0645]),
        (0xFC9B, &[0x0626, 0x0647]),
        (0xFC9C, &[0x0628, 0x062C]),
        (0xFC9D, &[0x0628, 0x062D]),
        (0xFC9E, &[0x0628, 0x062E]),
        (0xFC9F, &[0x0628, 0x0645]),
        (0xFCA0, &[0x0628, 0x0647]),
        (0xFCA1, &[0x062A, 0x062C]),
        (0xFCA2, &[0x062A, 0x062D]),
        (0xFCA3, &[0x062A, 0x062E]),
        (0xFCA4, &[0x062A, 0x0645]),
        (0xFCA5, &[0x062A, 0x0647]),
        (0xFCA6, &[0x062B, 0x0645]),
        (0xFCA7, &[0x062C, 0x062D]),
        (0xFCA8, &[0x062C, 0x0645]),
        (0xFCA9, &[0x062D, 0x062C]),
        (0xFCAA, &[0x062D, 0x0645]),
        (0xFCAB, &[0x062E, 0x062C]),
        (0xFCAC, &[0x062E, 0x0645]),
        (0xFCAD, &[0x0633, 0x062C]),
        (0xFCAE, &[0x0633, 0x062D]),
        (0xFCAF, &[0x0633, 0x062E]),
        (0xFCB0, &[0x0633, 0x0645]),
        (0xFCB1, &[0x0635, 0x062D]),
        (0xFCB2, &[0x0635, 0x062E]),
        (0xFCB3, &[0x0635, 0x0645]),
        (0xFCB4, &[0x0636, 0x062C]),
        (0xFCB5, &[0x0636, 0x062D]),
        (0xFCB6, &[0x0636, 0x062E]),
        (0xFCB7, &[0x0636, 0x0645]),
        (0xFCB8, &[0x0637, 0x062D]),
        (0xFCB9, &[0x0638, 0x0645]),
        (0xFCBA, &[0x0639, 0x062C]),
        (0xFCBB, &[0x0639, 0x0645]),
        (0xFCBC, &[0x063A, 0x062C]),
        (0xFCBD, &[0x063A, 0x0645]),
        (0xFCBE, &[0x0641, 0x062C]),
        (0xFCBF, &[0x0641, 0x062D]),
        (0xFCC0, &[0x0641, 0x062E]),
        (0xFCC1, &[0x0641, 0x0645]),
        (0xFCC2, &[0x0642, 0x062D]),
        (0xFCC3, &[0x0642, 0x0645]),
        (0xFCC4, &[0x0643, 0x062C]),
        (0xFCC5, &[0x0643, 0x062D]),
        (0xFCC6, &[0x0643, 0x062E]),
        (0xFCC7, &[0x0643, 0x0644]),
        (0xFCC8, &[0x0643, 0x0645]),
        (0xFCC9, &[0x0644, 0x062C]),
        (0xFCCA, &[0x0644, 0x062D]),
        (0xFCCB, &[0x0644, 0x062E]),
        (0xFCCC, &[0x0644, 0x0645]),
        (0xFCCD, &[0x0644, 0x0647]),
        (0xFCCE, &[0x0645, 0x062C]),
        (0xFCCF, &[0x0645, 0x062D]),
        (0xFCD0, &[0x0645, 0x062E]),
        (0xFCD1, &[0x0645, 0x0645]),
        (0xFCD2, &[0x0646, 0x062C]),
        (0xFCD3, &[0x0646, 0x062D]),
        (0xFCD4, &[0x0646, 0x062E]),
        (0xFCD5, &[0x0646, 0x0645]),
        (0xFCD6, &[0x0646, 0x0647]),
        (0xFCD7, &[0x0647, 0x062C]),
        (0xFCD8, &[0x0647, 0x0645]),
        (0xFCD9, &[0x0647, 0x0670]),
        (0xFCDA, &[0x064A, 0x062C]),
        (0xFCDB, &[0x064A, 0x062D]),
        (0xFCDC, &[0x064A, 0x062E]),
        (0xFCDD, &[0x064A, 0x0645]),
        (0xFCDE, &[0x064A, 0x0647]),
        (0xFCDF, &[0x0626, 0x0645]),
        (0xFCE0, &[0x0626, 0x0647]),
        (0xFCE1, &[0x0628, 0x0645]),
        (0xFCE2, &[0x0628, 0x0647]),
        (0xFCE3, &[0x062A, 0x0645]),
        (0xFCE4, &[0x062A, 0x0647]),
        (0xFCE5, &[0x062B, 0x0645]),
        (0xFCE6, &[0x062B, 0x0647]),
        (0xFCE7, &[0x0633, 0x0645]),
        (0xFCE8, &[0x0633, 0x0647]),
        (0xFCE9, &[0x0634, 0x0645]),
        (0xFCEA, &[0x0634, 0x0647]),
        (0xFCEB, &[0x0643, 0x0644]),
        (0xFCEC, &[0x0643, 0x0645]),
        (0xFCED, &[0x0644, 0x0645]),
        (0xFCEE, &[0x0646, 0x0645]),
        (0xFCEF, &[0x0646, 0x0647]),
        (0xFCF0, &[0x064A, 0x0645]),
        (0xFCF1, &[0x064A, 0x0647]),
        (0xFCF2, &[0x0640, 0x064E, 0x0651]),
        (0xFCF3, &[0x0640, 0x064F, 0x0651]),
        (0xFCF4, &[0x0640, 0x0650, 0x0651]),
        (0xFCF5, &[0x0637, 0x0649]),
        (0xFCF6, &[0x0637, 0x064A]),
        (0xFCF7, &[0x0639, 0x0649]),
        (0xFCF8, &[0x0639, 0x064A]),
        (0xFCF9, &[0x063A, 0x0649]),
        (0xFCFA, &[0x063A, 0x064A]),
        (0xFCFB, &[0x0633, 0x0649]),
        (0xFCFC, &[0x0633, 0x064A]),
        (0xFCFD, &[0x0634, 0x0649]),
        (0xFCFE, &[0x0634, 0x064A]),
        (0xFCFF, &[0x062D, 0x0649]),
        (0xFD00, &[0x062D, 0x064A]),
        (0xFD01, &[0x062C, 0x0649]),
        (0xFD02, &[0x062C, 0x064A]),
        (0xFD03, &[0x062E, 0x0649]),
        (0xFD04, &[0x062E, 0x064A]),
        (0xFD05, &[0x0635, 0x0649]),
        (0xFD06, &[0x0635, 0x064A]),
        (0xFD07, &[0x0636, 0x0649]),
        (0xFD08, &[0x0636, 0x064A]),
        (0xFD09, &[0x0634, 0x062C]),
        (0xFD0A, &[0x0634, 0x062D]),
        (0xFD0B, &[0x0634, 0x062E]),
        (0xFD0C, &[0x0634, 0x0645]),
        (0xFD0D, &[0x0634, 0x0631]),
        (0xFD0E, &[0x0633, 0x0631]),
        (0xFD0F, &[0x0635, 0x0631]),
        (0xFD10, &[0x0636, 0x0631]),
        (0xFD11, &[0x0637, 0x0649]),
        (0xFD12, &[0x0637, 0x064A]),
        (0xFD13, &[0x0639, 0x0649]),
        (0xFD14, &[0x0639, 0x064A]),
        (0xFD15, &[0x063A, 0x0649]),
        (0xFD16, &[0x063A, 0x064A]),
        (0xFD17, &[0x0633, 0x0649]),
        (0xFD18, &[0x0633, 0x064A]),
        (0xFD19, &[0x0634, 0x0649]),
        (0xFD1A, &[0x0634, 0x064A]),
        (0xFD1B, &[0x062D, 0x0649]),
        (0xFD1C, &[0x062D, 0x064A]),
        (0xFD1D, &[0x062C, 0x0649]),
        (0xFD1E, &[0x062C, 0x064A]),
        (0xFD1F, &[0x062E, 0x0649]),
        (0xFD20, &[0x062E, 0x064A]),
        (0xFD21, &[0x0635, 0x0649]),
        (0xFD22, &[0x0635, 0x064A]),
        (0xFD23, &[0x0636, 0x0649]),
        (0xFD24, &[0x0636, 0x064A]),
        (0xFD25, &[0x0634, 0x062C]),
        (0xFD26, &[0x0634, 0x062D]),
        (0xFD27, &[0x0634, 0x062E]),
        (0xFD28, &[0x0634, 0x0645]),
        (0xFD29, &[0x0634, 0x0631]),
        (0xFD2A, &[0x0633, 0x0631]),
        (0xFD2B, &[0x0635, 0x0631]),
        (0xFD2C, &[0x0636, 0x0631]),
        (0xFD2D, &[0x0634, 0x062C]),
        (0xFD2E, &[0x0634, 0x062D]),
        (0xFD2F, &[0x0634, 0x062E]),
        (0xFD30, &[0x0634, 0x0645]),
        (0xFD31, &[0x0633, 0x0647]),
        (0xFD32, &[0x0634, 0x0647]),
        (0xFD33, &[0x0637, 0x0645]),
        (0xFD34, &[0x0633, 0x062C]),
        (0xFD35, &[0x0633, 0x062D]),
        (0xFD36, &[0x0633, 0x062E]),
        (0xFD37, &[0x0634, 0x062C]),
        (0xFD38, &[0x0634, 0x062D]),
        (0xFD39, &[0x0634, 0x062E]),
        (0xFD3A, &[0x0637, 0x0645]),
        (0xFD3B, &[0x0638, 0x0645]),
        (0xFD3C, &[0x0627, 0x064B]),
        (0xFD3D, &[0x0627, 0x064B]),
        (0xFD50, &[0x062A, 0x062C, 0x0645]),
        (0xFD51, &[0x062A, 0x062D, 0x062C]),
        (0xFD52, &[0x062A, 0x062D, 0x062C]),
        (0xFD53, &[0x062A, 0x062D, 0x0645]),
        (0xFD54, &[0x062A, 0x062E, 0x0645]),
        (0xFD55, &[0x062A, 0x0645, 0x062C]),
        (0xFD56, &[0x062A, 0x0645, 0x062D]),
        (0xFD57, &[0x062A, 0x0645, 0x062E]),
        (0xFD58, &[0x062C, 0x0645, 0x062D]),
        (0xFD59, &[0x062C, 0x0645, 0x062D]),
        (0xFD5A, &[0x062D, 0x0645, 0x064A]),
        (0xFD5B, &[0x062D, 0x0645, 0x0649]),
        (0xFD5C, &[0x0633, 0x062D, 0x062C]),
        (0xFD5D, &[0x0633, 0x062C, 0x062D]),
        (0xFD5E, &[0x0633, 0x062C, 0x0649]),
        (0xFD5F, &[0x0633, 0x0645, 0x062D]),
        (0xFD60, &[0x0633, 0x0645, 0x062D]),
        (0xFD61, &[0x0633, 0x0645, 0x062C]),
        (0xFD62, &[0x0633, 0x0645, 0x0645]),
        (0xFD63, &[0x0633, 0x0645, 0x0645]),
        (0xFD64, &[0x0635, 0x062D, 0x062D]),
        (0xFD65, &[0x0635, 0x062D, 0x062D]),
        (0xFD66, &[0x0635, 0x0645, 0x0645]),
        (0xFD67, &[0x0634, 0x062D, 0x0645]),
        (0xFD68, &[0x0634, 0x062D, 0x0645]),
        (0xFD69, &[0x0634, 0x062C, 0x064A]),
        (0xFD6A, &[0x0634, 0x0645, 0x062E]),
        (0xFD6B, &[0x0634, 0x0645, 0x062E]),
        (0xFD6C, &[0x0634, 0x0645, 0x0645]),
        (0xFD6D, &[0x0634, 0x0645, 0x0645]),
        (0xFD6E, &[0x0636, 0x062D, 0x0649]),
        (0xFD6F, &[0x0636, 0x062E, 0x0645]),
        (0xFD70, &[0x0636, 0x062E, 0x0645]),
        (0xFD71, &[0x0637, 0x0645, 0x062D]),
        (0xFD72, &[0x0637, 0x0645, 0x062D]),
        (0xFD73, &[0x0637, 0x0645, 0x0645]),
        (0xFD74, &[0x0637, 0x0645, 0x064A]),
        (0xFD75, &[0x0639, 0x062C, 0x0645]),
        (0xFD76, &[0x0639, 0x0645, 0x0645]),
        (0xFD77, &[0x0639, 0x0645, 0x0645]),
        (0xFD78, &[0x0639, 0x0645, 0x0649]),
        (0xFD79, &[0x063A, 0x0645, 0x0645]),
        (0xFD7A, &[0x063A, 0x0645, 0x064A]),
        (0xFD7B, &[0x063A, 0x0645, 0x0649]),
        (0xFD7C, &[0x0641, 0x062E, 0x0645]),
        (0xFD7D, &[0x0641, 0x062E, 0x0645]),
        (0xFD7E, &[0x0642, 0x0645, 0x062D]),
        (0xFD7F, &[0x0642, 0x0645, 0x0645]),
        (0xFD80, &[0x0644, 0x062D, 0x0645]),
        (0xFD81, &[0x0644, 0x062D, 0x064A]),
        (0xFD82, &[0x0644, 0x062D, 0x0649]),
        (0xFD83, &[0x0644, 0x062C, 0x062C]),
        (0xFD84, &[0x0644, 0x062C, 0x062C]),
        (0xFD85, &[0x0644, 0x062E, 0x0645]),
        (0xFD86, &[0x0644, 0x062E, 0x0645]),
        (0xFD87, &[0x0644, 0x0645, 0x062D]),
        (0xFD88, &[0x0644, 0x0645, 0x062D]),
        (0xFD89, &[0x0645, 0x062D, 0x062C]),
        (0xFD8A, &[0x0645, 0x062D, 0x0645]),
        (0xFD8B, &[0x0645, 0x062D, 0x064A]),
        (0xFD8C, &[0x0645, 0x062C, 0x062D]),
        (0xFD8D, &[0x0645, 0x062C, 0x0645]),
        (0xFD8E, &[0x0645, 0x062E, 0x062C]),
        (0xFD8F, &[0x0645, 0x062E, 0x0645]),
        (0xFD92, &[0x0645, 0x062C, 0x062E]),
        (0xFD93, &[0x0647, 0x0645, 0x062C]),
        (0xFD94, &[0x0647, 0x0645, 0x0645]),
        (0xFD95, &[0x0646, 0x062D, 0x0645]),
        (0xFD96, &[0x0646, 0x062D, 0x0649]),
        (0xFD97, &[0x0646, 0x062C, 0x0645]),
        (0xFD98, &[0x0646, 0x062C, 0x0645]),
        (0xFD99, &[0x0646, 0x062C, 0x0649]),
        (0xFD9A, &[0x0646, 0x0645, 0x064A]),
        (0xFD9B, &[0x0646, 0x0645, 0x0649]),
        (0xFD9C, &[0x064A, 0x0645, 0x0645]),
        (0xFD9D, &[0x064A, 0x0645, 0x0645]),
        (0xFD9E, &[0x0628, 0x062E, 0x064A]),
        (0xFD9F, &[0x062A, 0x062C, 0x064A]),
        (0xFDA0, &[0x062A, 0x062C, 0x0649]),
        (0xFDA1, &[0x062A, 0x062E, 0x064A]),
        (0xFDA2, &[0x062A, 0x062E, 0x0649]),
        (0xFDA3, &[0x062A, 0x0645, 0x064A]),
        (0xFDA4, &[0x062A, 0x0645, 0x0649]),
        (0xFDA5, &[0x062C, 0x0645, 0x064A]),
        (0xFDA6, &[0x062C, 0x062D, 0x0649]),
        (0xFDA7, &[0x062C, 0x0645, 0x0649]),
        (0xFDA8, &[0x0633, 0x062E, 0x0649]),
        (0xFDA9, &[0x0635, 0x062D, 0x064A]),
        (0xFDAA, &[0x0634, 0x062D, 0x064A]),
        (0xFDAB, &[0x0636, 0x062D, 0x064A]),
        (0xFDAC, &[0x0644, 0x062C, 0x064A]),
        (0xFDAD, &[0x0644, 0x0645, 0x064A]),
        (0xFDAE, &[0x064A, 0x062D, 0x064A]),
        (0xFDAF, &[0x064A, 0x062C, 0x064A]),
        (0xFDB0, &[0x064A, 0x0645, 0x064A]),
        (0xFDB1, &[0x0645, 0x0645, 0x064A]),
        (0xFDB2, &[0x0642, 0x0645, 0x064A]),
        (0xFDB3, &[0x0646, 0x062D, 0x064A]),
        (0xFDB4, &[0x0642, 0x0645, 0x062D]),
        (0xFDB5, &[0x0644, 0x062D, 0x0645]),
        (0xFDB6, &[0x0639, 0x0645, 0x064A]),
        (0xFDB7, &[0x0643, 0x0645, 0x064A]),
        (0xFDB8, &[0x0646, 0x062C, 0x062D]),
        (0xFDB9, &[0x0645, 0x062E, 0x064A]),
        (0xFDBA, &[0x0644, 0x062C, 0x0645]),
        (0xFDBB, &[0x0643, 0x0645, 0x0645]),
        (0xFDBC, &[0x0644, 0x062C, 0x0645]),
        (0xFDBD, &[0x0646, 0x062C, 0x062D]),
        (0xFDBE, &[0x062C, 0x062D, 0x064A]),
        (0xFDBF, &[0x062D, 0x062C, 0x064A]),
        (0xFDC0, &[0x0645, 0x062C, 0x064A]),
        (0xFDC1, &[0x0641, 0x0645, 0x064A]),
        (0xFDC2, &[0x0628, 0x062D, 0x064A]),
        (0xFDC3, &[0x0643, 0x0645, 0x0645]),
        (0xFDC4, &[0x0639, 0x062C, 0x0645]),
        (0xFDC5, &[0x0635, 0x0645, 0x0645]),
        (0xFDC6, &[0x0633, 0x062E, 0x064A]),
        (0xFDC7, &[0x0646, 0x062C, 0x064A]),
        (0xFDF0, &[0x0635, 0x0644, 0x06D2]),
        (0xFDF1, &[0x0642, 0x0644, 0x06D2]),
        (0xFDF2, &[0x0627, 0x0644, 0x0644, 0x0647]),
        (0xFDF3, &[0x0627, 0x0643, 0x0628, 0x0631]),
        (0xFDF4, &[0x0645, 0x062D, 0x0645, 0x062F]),
        (0xFDF5, &[0x0635, 0x0644, 0x0639, 0x0645]),
        (0xFDF6, &[0x0631, 0x0633, 0x0648, 0x0644]),
        (0xFDF7, &[0x0639, 0x0644, 0x064A, 0x0647]),
        (0xFDF8, &[0x0648, 0x0633, 0x0644, 0x0645]),
        (0xFDF9, &[0x0635, 0x0644, 0x0649]),
        (0xFDFA, &[0x0635, 0x0644, 0x0649, 0x0020, 0x0627, 0x0644, 0x0644, 0x0647, 0x0020, 0x0639, 0x0644, 0x064A, 0x0647, 0x0020, 0x0648, 0x0633, 0x0644, 0x0645]),
        (0xFDFB, &[0x062C, 0x0644, 0x0020, 0x062C, 0x0644, 0x0627, 0x0644, 0x0647]),
        (0xFDFC, &[0x0631, 0x06CC, 0x0627, 0x0644]),
        (0xFE10, &[0x002C]),
        (0xFE11, &[0x3001]),
        (0xFE12, &[0x3002]),
        (0xFE13, &[0x003A]),
        (0xFE14, &[0x003B]),
        (0xFE15, &[0x0021]),
        (0xFE16, &[0x003F]),
        (0xFE17, &[0x3016]),
        (0xFE18, &[0x3017]),
        (0xFE19, &[0x2026]),
        (0xFE30, &[0x2025]),
        (0xFE31, &[0x2014]),
        (0xFE32, &[0x2013]),
        (0xFE33, &[0x005F]),
        (0xFE34, &[0x005F]),
        (0xFE35, &[0x0028]),
        (0xFE36, &[0x0029]),
        (0xFE37, &[0x007B]),
        (0xFE38, &[0x007D]),
        (0xFE39, &[0x3014]),
        (0xFE3A, &[0x3015]),
        (0xFE3B, &[0x3010]),
        (0xFE3C, &[0x3011]),
        (0xFE3D, &[0x300A]),
        (0xFE3E, &[0x300B]),
        (0xFE3F, &[0x3008]),
        (0xFE40, &[0x3009]),
        (0xFE41, &[0x300C]),
        (0xFE42, &[0x300D]),
        (0xFE43, &[0x300E]),
        (0xFE44, &[0x300F]),
        (0xFE47, &[0x005B]),
        (0xFE48, &[0x005D]),
        (0xFE49, &[0x203E]),
        (0xFE4A, &[0x203E]),
        (0xFE4B, &[0x203E]),
        (0xFE4C, &[0x203E]),
        (0xFE4D, &[0x005F]),
        (0xFE4E, &[0x005F]),
        (0xFE4F, &[0x005F]),
        (0xFE50, &[0x002C]),
        (0xFE51, &[0x3001]),
        (0xFE52, &[0x002E]),
        (0xFE54, &[0x003B]),
        (0xFE55, &[0x003A]),
        (0xFE56, &[0x003F]),
        (0xFE57, &[0x0021]),
        (0xFE58, &[0x2014]),
        (0xFE59, &[0x0028]),
        (0xFE5A, &[0x0029]),
        (0xFE5B, &[0x007B]),
        (0xFE5C, &[0x007D]),
        (0xFE5D, &[0x3014]),
        (0xFE5E, &[0x3015]),
        (0xFE5F, &[0x0023]),
        (0xFE60, &[0x0026]),
        (0xFE61, &[0x002A]),
        (0xFE62, &[0x002B]),
        (0xFE63, &[0x002D]),
        (0xFE64, &[0x003C]),
        (0xFE65, &[0x003E]),
        (0xFE66, &[0x003D]),
        (0xFE68, &[0x005C]),
        (0xFE69, &[0x0024]),
        (0xFE6A, &[0x0025]),
        (0xFE6B, &[0x0040]),
        (0xFE70, &[0x0020, 0x064B]),
        (0xFE71, &[0x0640, 0x064B]),
        (0xFE72, &[0x0020, 0x064C]),
        (0xFE74, &[0x0020, 0x064D]),
        (0xFE76, &[0x0020, 0x064E]),
        (0xFE77, &[0x0640, 0x064E]),
        (0xFE78, &[0x0020, 0x064F]),
        (0xFE79, &[0x0640, 0x064F]),
        (0xFE7A, &[0x0020, 0x0650]),
        (0xFE7B, &[0x0640, 0x0650]),
        (0xFE7C, &[0x0020, 0x0651]),
        (0xFE7D, &[0x0640, 0x0651]),
        (0xFE7E, &[0x0020, 0x0652]),
        (0xFE7F, &[0x0640, 0x0652]),
        (0xFE80, &[0x0621]),
        (0xFE81, &[0x0622]),
        (0xFE82, &[0x0622]),
        (0xFE83, &[0x0623]),
        (0xFE84, &[0x0623]),
        (0xFE85, &[0x0624]),
        (0xFE86, &[0x0624]),
        (0xFE87, &[0x0625]),
        (0xFE88, &[0x0625]),
        (0xFE89, &[0x0626]),
        (0xFE8A, &[0x0626]),
        (0xFE8B, &[0x0626]),
        (0xFE8C, &[0x0626]),
        (0xFE8D, &[0x0627]),
        (0xFE8E, &[0x0627]),
        (0xFE8F, &[0x0628]),
        (0xFE90, &[0x0628]),
        (0xFE91, &[0x0628]),
        (0xFE92, &[0x0628]),
        (0xFE93, &[0x0629]),
        (0xFE94, &[0x0629]),
        (0xFE95, &[0x062A]),
        (0xFE96, &[0x062A]),
        (0xFE97, &[0x062A]),
        (0xFE98, &[0x062A]),
        (0xFE99, &[0x062B]),
        (0xFE9A, &[0x062B]),
        (0xFE9B, &[0x062B]),
        (0xFE9C, &[0x062B]),
        (0xFE9D, &[0x062C]),
        (0xFE9E, &[0x062C]),
        (0xFE9F, &[0x062C]),
        (0xFEA0, &[0x062C]),
        (0xFEA1, &[0x062D]),
        (0xFEA2, &[0x062D]),
        (0xFEA3, &[0x062D]),
        (0xFEA4, &[0x062D]),
        (0xFEA5, &[0x062E]),
        (0xFEA6, &[0x062E]),
        (0xFEA7, &[0x062E]),
        (0xFEA8, &[0x062E]),
        (0xFEA9, &[0x062F]),
        (0xFEAA, &[0x062F]),
        (0xFEAB, &[0x0630]),
        (0xFEAC, &[0x0630]),
        (0xFEAD, &[0x0631]),
        (0xFEAE, &[0x0631]),
        (0xFEAF, &[0x0632]),
        (0xFEB0, &[0x0632]),
        (0xFEB1, &[0x0633]),
        (0xFEB2, &[0x0633]),
        (0xFEB3, &[0x0633]),
        (0xFEB4, &[0x0633]),
        (0xFEB5, &[0x0634]),
        (0xFEB6, &[0x0634]),
        (0xFEB7, &[0x0634]),
        (0xFEB8, &[0x0634]),
        (0xFEB9, &[0x0635]),
        (0xFEBA, &[0x0635]),
        (0xFEBB, &[0x0635]),
        (0xFEBC, &[0x0635]),
        (0xFEBD, &[0x0636]),
        (0xFEBE, &[0x0636]),
        (0xFEBF, &[0x0636]),
        (0xFEC0, &[0x0636]),
        (0xFEC1, &[0x0637]),
        (0xFEC2, &[0x0637]),
        (0xFEC3, &[0x0637]),
        (0xFEC4, &[0x0637]),
        (0xFEC5, &[0x0638]),
        (0xFEC6, &[0x0638]),
        (0xFEC7, &[0x0638]),
        (0xFEC8, &[0x0638]),
        (0xFEC9, &[0x0639]),
        (0xFECA, &[0x0639]),
        (0xFECB, &[0x0639]),
        (0xFECC, &[0x0639]),
        (0xFECD, &[0x063A]),
        (0xFECE, &[0x063A]),
        (0xFECF, &[0x063A]),
        (0xFED0, &[0x063A]),
        (0xFED1, &[0x0641]),
        (0xFED2, &[0x0641]),
        (0xFED3, &[0x0641]),
        (0xFED4, &[0x0641]),
        (0xFED5, &[0x0642]),
        (0xFED6, &[0x0642]),
        (0xFED7, &[0x0642]),
        (0xFED8, &[0x0642]),
        (0xFED9, &[0x0643]),
        (0xFEDA, &[0x0643]),
        (0xFEDB, &[0x0643]),
        (0xFEDC, &[0x0643]),
        (0xFEDD, &[0x0644]),
        (0xFEDE, &[0x0644]),
        (0xFEDF, &[0x0644]),
        (0xFEE0, &[0x0644]),
        (0xFEE1, &[0x0645]),
        (0xFEE2, &[0x0645]),
        (0xFEE3, &[0x0645]),
        (0xFEE4, &[0x0645]),
        (0xFEE5, &[0x0646]),
        (0xFEE6, &[0x0646]),
        (0xFEE7, &[0x0646]),
        (0xFEE8, &[0x0646]),
        (0xFEE9, &[0x0647]),
        (0xFEEA, &[0x0647]),
        (0xFEEB, &[0x0647]),
        (0xFEEC, &[0x0647]),
        (0xFEED, &[0x0648]),
        (0xFEEE, &[0x0648]),
        (0xFEEF, &[0x0649]),
        (0xFEF0, &[0x0649]),
        (0xFEF1, &[0x064A]),
        (0xFEF2, &[0x064A]),
        (0xFEF3, &[0x064A]),
        (0xFEF4, &[0x064A]),
        (0xFEF5, &[0x0644, 0x0622]),
        (0xFEF6, &[0x0644, 0x0622]),
        (0xFEF7, &[0x0644, 0x0623]),
        (0xFEF8, &[0x0644, 0x0623]),
        (0xFEF9, &[0x0644, 0x0625]),
        (0xFEFA, &[0x0644, 0x0625]),
        (0xFEFB, &[0x0644, 0x0627]),
        (0xFEFC, &[0x0644, 0x0627]),
        (0xFF01, &[0x0021]),
        (0xFF02, &[0x0022]),
        (0xFF03, &[0x0023]),
        (0xFF04, &[0x0024]),
        (0xFF05, &[0x0025]),
        (0xFF06, &[0x0026]),
        (0xFF07, &[0x0027]),
        (0xFF08, &[0x0028]),
        (0xFF09, &[0x0029]),
        (0xFF0A, &[0x002A]),
        (0xFF0B, &[0x002B]),
        (0xFF0C, &[0x002C]),
        (0xFF0D, &[0x002D]),
        (0xFF0E, &[0x002E]),
        (0xFF0F, &[0x002F]),
        (0xFF10, &[0x0030]),
        (0xFF11, &[0x0031]),
        (0xFF12, &[0x0032]),
        (0xFF13, &[0x0033]),
        (0xFF14, &[0x0034]),
        (0xFF15, &[0x0035]),
        (0xFF16, &[0x0036]),
        (0xFF17, &[0x0037]),
        (0xFF18, &[0x0038]),
        (0xFF19, &[0x0039]),
        (0xFF1A, &[0x003A]),
        (0xFF1B, &[0x003B]),
        (0xFF1C, &[0x003C]),
        (0xFF1D, &[0x003D]),
        (0xFF1E, &[0x003E]),
        (0xFF1F, &[0x003F]),
        (0xFF20, &[0x0040]),
        (0xFF21, &[0x0041]),
        (0xFF22, &[0x0042]),
        (0xFF23, &[0x0043]),
        (0xFF24, &[0x0044]),
        (0xFF25, &[0x0045]),
        (0xFF26, &[0x0046]),
        (0xFF27, &[0x0047]),
        (0xFF28, &[0x0048]),
        (0xFF29, &[0x0049]),
        (0xFF2A, &[0x004A]),
        (0xFF2B, &[0x004B]),
        (0xFF2C, &[0x004C]),
        (0xFF2D, &[0x004D]),
        (0xFF2E, &[0x004E]),
        (0xFF2F, &[0x004F]),
        (0xFF30, &[0x0050]),
        (0xFF31, &[0x0051]),
        (0xFF32, &[0x0052]),
        (0xFF33, &[0x0053]),
        (0xFF34, &[0x0054]),
        (0xFF35, &[0x0055]),
        (0xFF36, &[0x0056]),
        (0xFF37, &[0x0057]),
        (0xFF38, &[0x0058]),
        (0xFF39, &[0x0059]),
        (0xFF3A, &[0x005A]),
        (0xFF3B, &[0x005B]),
        (0xFF3C, &[0x005C]),
        (0xFF3D, &[0x005D]),
        (0xFF3E, &[0x005E]),
        (0xFF3F, &[0x005F]),
        (0xFF40, &[0x0060]),
        (0xFF41, &[0x0061]),
        (0xFF42, &[0x0062]),
        (0xFF43, &[0x0063]),
        (0xFF44, &[0x0064]),
        (0xFF45, &[0x0065]),
        (0xFF46, &[0x0066]),
        (0xFF47, &[0x0067]),
        (0xFF48, &[0x0068]),
        (0xFF49, &[0x0069]),
        (0xFF4A, &[0x006A]),
        (0xFF4B, &[0x006B]),
        (0xFF4C, &[0x006C]),
        (0xFF4D, &[0x006D]),
        (0xFF4E, &[0x006E]),
        (0xFF4F, &[0x006F]),
        (0xFF50, &[0x0070]),
        (0xFF51, &[0x0071]),
        (0xFF52, &[0x0072]),
        (0xFF53, &[0x0073]),
        (0xFF54, &[0x0074]),
        (0xFF55, &[0x0075]),
        (0xFF56, &[0x0076]),
        (0xFF57, &[0x0077]),
        (0xFF58, &[0x0078]),
        (0xFF59, &[0x0079]),
        (0xFF5A, &[0x007A]),
        (0xFF5B, &[0x007B]),
        (0xFF5C, &[0x007C]),
        (0xFF5D, &[0x007D]),
        (0xFF5E, &[0x007E]),
        (0xFF5F, &[0x2985]),
        (0xFF60, &[0x2986]),
        (0xFF61, &[0x3002]),
        (0xFF62, &[0x300C]),
        (0xFF63, &[0x300D]),
        (0xFF64, &[0x3001]),
        (0xFF65, &[0x30FB]),
        (0xFF66, &[0x30F2]),
        (0xFF67, &[0x30A1]),
        (0xFF68, &[0x30A3]),
        (0xFF69, &[0x30A5]),
        (0xFF6A, &[0x30A7]),
        (0xFF6B, &[0x30A9]),
        (0xFF6C, &[0x30E3]),
        (0xFF6D, &[0x30E5]),
        (0xFF6E, &[0x30E7]),
        (0xFF6F, &[0x30C3]),
        (0xFF70, &[0x30FC]),
        (0xFF71, &[0x30A2]),
        (0xFF72, &[0x30A4]),
        (0xFF73, &[0x30A6]),
        (0xFF74, &[0x30A8]),
        (0xFF75, &[0x30AA]),
        (0xFF76, &[0x30AB]),
        (0xFF77, &[0x30AD]),
        (0xFF78, &[0x30AF]),
        (0xFF79, &[0x30B1]),
        (0xFF7A, &[0x30B3]),
        (0xFF7B, &[0x30B5]),
        (0xFF7C, &[0x30B7]),
        (0xFF7D, &[0x30B9]),
        (0xFF7E, &[0x30BB]),
        (0xFF7F, &[0x30BD]),
        (0xFF80, &[0x30BF]),
        (0xFF81, &[0x30C1]),
        (0xFF82, &[0x30C4]),
        (0xFF83, &[0x30C6]),
        (0xFF84, &[0x30C8]),
        (0xFF85, &[0x30CA]),
        (0xFF86, &[0x30CB]),
        (0xFF87, &[0x30CC]),
        (0xFF88, &[0x30CD]),
        (0xFF89, &[0x30CE]),
        (0xFF8A, &[0x30CF]),
        (0xFF8B, &[0x30D2]),
        (0xFF8C, &[0x30D5]),
        (0xFF8D, &[0x30D8]),
        (0xFF8E, &[0x30DB]),
        (0xFF8F, &[0x30DE]),
        (0xFF90, &[0x30DF]),
        (0xFF91, &[0x30E0]),
        (0xFF92, &[0x30E1]),
        (0xFF93, &[0x30E2]),
        (0xFF94, &[0x30E4]),
        (0xFF95, &[0x30E6]),
        (0xFF96, &[0x30E8]),
        (0xFF97, &[0x30E9]),
        (0xFF98, &[0x30EA]),
        (0xFF99, &[0x30EB]),
        (0xFF9A, &[0x30EC]),
        (0xFF9B, &[0x30ED]),
        (0xFF9C, &[0x30EF]),
        (0xFF9D, &[0x30F3]),
        (0xFF9E, &[0x3099]),
        (0xFF9F, &[0x309A]),
        (0xFFA0, &[0x3164]),
        (0xFFA1, &[0x3131]),
        (0xFFA2, &[0x3132]),
        (0xFFA3, &[0x3133]),
        (0xFFA4, &[0x3134]),
        (0xFFA5, &[0x3135]),
        (0xFFA6, &[0x3136]),
        (0xFFA7, &[0x3137]),
        (0xFFA8, &[0x3138]),
        (0xFFA9, &[0x3139]),
        (0xFFAA, &[0x313A]),
        (0xFFAB, &[0x313B]),
        (0xFFAC, &[0x313C]),
        (0xFFAD, &[0x313D]),
        (0xFFAE, &[0x313E]),
        (0xFFAF, &[0x313F]),
        (0xFFB0, &[0x3140]),
        (0xFFB1, &[0x3141]),
        (0xFFB2, &[0x3142]),
        (0xFFB3, &[0x3143]),
        (0xFFB4, &[0x3144]),
        (0xFFB5, &[0x3145]),
        (0xFFB6, &[0x3146]),
        (0xFFB7, &[0x3147]),
        (0xFFB8, &[0x3148]),
        (0xFFB9, &[0x3149]),
        (0xFFBA, &[0x314A]),
        (0xFFBB, &[0x314B]),
        (0xFFBC, &[0x314C]),
        (0xFFBD, &[0x314D]),
        (0xFFBE, &[0x314E]),
        (0xFFC2, &[0x314F]),
        (0xFFC3, &[0x3150]),
        (0xFFC4, &[0x3151]),
        (0xFFC5, &[0x3152]),
        (0xFFC6, &[0x3153]),
        (0xFFC7, &[0x3154]),
        (0xFFCA, &[0x3155]),
        (0xFFCB, &[0x3156]),
        (0xFFCC, &[0x3157]),
        (0xFFCD, &[0x3158]),
        (0xFFCE, &[0x3159]),
        (0xFFCF, &[0x315A]),
        (0xFFD2, &[0x315B]),
        (0xFFD3, &[0x315C]),
        (0xFFD4, &[0x315D]),
        (0xFFD5, &[0x315E]),
        (0xFFD6, &[0x315F]),
        (0xFFD7, &[0x3160]),
        (0xFFDA, &[0x3161]),
        (0xFFDB, &[0x3162]),
        (0xFFDC, &[0x3163]),
        (0xFFE0, &[0x00A2]),
        (0xFFE1, &[0x00A3]),
        (0xFFE2, &[0x00AC]),
        (0xFFE3, &[0x00AF]),
        (0xFFE4, &[0x00A6]),
        (0xFFE5, &[0x00A5]),
        (0xFFE6, &[0x20A9]),
        (0xFFE8, &[0x2502]),
        (0xFFE9, &[0x2190]),
        (0xFFEA, &[0x2191]),
        (0xFFEB, &[0x2192]),
        (0xFFEC, &[0x2193]),
        (0xFFED, &[0x25A0]),
        (0xFFEE, &[0x25CB]),
        (0x10781, &[0x02D0]),
        (0x10782, &[0x02D1]),
        (0x10783, &[0x00E6]),
        (0x10784, &[0x0299]),
        (0x10785, &[0x0253]),
        (0x10787, &[0x02A3]),
        (0x10788, &[0xAB66]),
        (0x10789, &[0x02A5]),
        (0x1078A, &[0x02A4]),
        (0x1078B, &[0x0256]),
        (0x1078C, &[0x0257]),
        (0x1078D, &[0x1D91]),
        (0x1078E, &[0x0258]),
        (0x1078F, &[0x025E]),
        (0x10790, &[0x02A9]),
        (0x10791, &[0x0264]),
        (0x10792, &[0x0262]),
        (0x10793, &[0x0260]),
        (0x10794, &[0x029B]),
        (0x10795, &[0x0127]),
        (0x10796, &[0x029C]),
        (0x10797, &[0x0267]),
        (0x10798, &[0x0284]),
        (0x10799, &[0x02AA]),
        (0x1079A, &[0x02AB]),
        (0x1079B, &[0x026C]),
        (0x1079C, &[0x1DF04]),
        (0x1079D, &[0xA78E]),
        (0x1079E, &[0x026E]),
        (0x1079F, &[0x1DF05]),
        (0x107A0, &[0x028E]),
        (0x107A1, &[0x1DF06]),
        (0x107A2, &[0x00F8]),
        (0x107A3, &[0x0276]),
        (0x107A4, &[0x0277]),
        (0x107A5, &[0x0071]),
        (0x107A6, &[0x027A]),
        (0x107A7, &[0x1DF08]),
        (0x107A8, &[0x027D]),
        (0x107A9, &[0x027E]),
        (0x107AA, &[0x0280]),
        (0x107AB, &[0x02A8]),
        (0x107AC, &[0x02A6]),
        (0x107AD, &[0xAB67]),
        (0x107AE, &[0x02A7]),
        (0x107AF, &[0x0288]),
        (0x107B0, &[0x2C71]),
        (0x107B2, &[0x028F]),
        (0x107B3, &[0x02A1]),
        (0x107B4, &[0x02A2]),
        (0x107B5, &[0x0298]),
        (0x107B6, &[0x01C0]),
        (0x107B7, &[0x01C1]),
        (0x107B8, &[0x01C2]),
        (0x107B9, &[0x1DF0A]),
        (0x107BA, &[0x1DF1E]),
        (0x1D400, &[0x0041]),
        (0x1D401, &[0x0042]),
        (0x1D402, &[0x0043]),
        (0x1D403, &[0x0044]),
        (0x1D404, &[0x0045]),
        (0x1D405, &[0x0046]),
        (0x1D406, &[0x0047]),
        (0x1D407, &[0x0048]),
        (0x1D408, &[0x0049]),
        (0x1D409, &[0x004A]),
        (0x1D40A, &[0x004B]),
        (0x1D40B, &[0x004C]),
        (0x1D40C, &[0x004D]),
        (0x1D40D, &[0x004E]),
        (0x1D40E, &[0x004F]),
        (0x1D40F, &[0x0050]),
        (0x1D410, &[0x0051]),
        (0x1D411, &[0x0052]),
        (0x1D412, &[0x0053]),
        (0x1D413, &[0x0054]),
        (0x1D414, &[0x0055]),
        (0x1D415, &[0x0056]),
        (0x1D416, &[0x0057]),
        (0x1D417, &[0x0058]),
        (0x1D418, &[0x0059]),
        (0x1D419, &[0x005A]),
        (0x1D41A, &[0x0061]),
        (0x1D41B, &[0x0062]),
        (0x1D41C, &[0x0063]),
        (0x1D41D, &[0x0064]),
        (0x1D41E, &[0x0065]),
        (0x1D41F, &[0x0066]),
        (0x1D420, &[0x0067]),
        (0x1D421, &[0x0068]),
        (0x1D422, &[0x0069]),
        (0x1D423, &[0x006A]),
        (0x1D424, &[0x006B]),
        (0x1D425, &[0x006C]),
        (0x1D426, &[0x006D]),
        (0x1D427, &[0x006E]),
        (0x1D428, &[0x006F]),
        (0x1D429, &[0x0070]),
        (0x1D42A, &[0x0071]),
        (0x1D42B, &[0x0072]),
        (0x1D42C, &[0x0073]),
        (0x1D42D, &[0x0074]),
        (0x1D42E, &[0x0075]),
        (0x1D42F, &[0x0076]),
        (0x1D430, &[0x0077]),
        (0x1D431, &[0x0078]),
        (0x1D432, &[0x0079]),
        (0x1D433, &[0x007A]),
        (0x1D434, &[0x0041]),
        (0x1D435, &[0x0042]),
        (0x1D436, &[0x0043]),
        (0x1D437, &[0x0044]),
        (0x1D438, &[0x0045]),
        (0x1D439, &[0x0046]),
        (0x1D43A, &[0x0047]),
        (0x1D43B, &[0x0048]),
        (0x1D43C, &[0x0049]),
        (0x1D43D, &[0x004A]),
        (0x1D43E, &[0x004B]),
        (0x1D43F, &[0x004C]),
        (0x1D440, &[0x004D]),
        (0x1D441, &[0x004E]),
        (0x1D442, &[0x004F]),
        (0x1D443, &[0x0050]),
        (0x1D444, &[0x0051]),
        (0x1D445, &[0x0052]),
        (0x1D446, &[0x0053]),
        (0x1D447, &[0x0054]),
        (0x1D448, &[0x0055]),
        (0x1D449, &[0x0056]),
        (0x1D44A, &[0x0057]),
        (0x1D44B, &[0x0058]),
        (0x1D44C, &[0x0059]),
        (0x1D44D, &[0x005A]),
        (0x1D44E, &[0x0061]),
        (0x1D44F, &[0x0062]),
        (0x1D450, &[0x0063]),
        (0x1D451, &[0x0064]),
        (0x1D452, &[0x0065]),
        (0x1D453, &[0x0066]),
        (0x1D454, &[0x0067]),
        (0x1D456, &[0x0069]),
        (0x1D457, &[0x006A]),
        (0x1D458, &[0x006B]),
        (0x1D459, &[0x006C]),
        (0x1D45A, &[0x006D]),
        (0x1D45B, &[0x006E]),
        (0x1D45C, &[0x006F]),
        (0x1D45D, &[0x0070]),
        (0x1D45E, &[0x0071]),
        (0x1D45F, &[0x0072]),
        (0x1D460, &[0x0073]),
        (0x1D461, &[0x0074]),
        (0x1D462, &[0x0075]),
        (0x1D463, &[0x0076]),
        (0x1D464, &[0x0077]),
        (0x1D465, &[0x0078]),
        (0x1D466, &[0x0079]),
        (0x1D467, &[0x007A]),
        (0x1D468, &[0x0041]),
        (0x1D469, &[0x0042]),
        (0x1D46A, &[0x0043]),
        (0x1D46B, &[0x0044]),
        (0x1D46C, &[0x0045]),
        (0x1D46D, &[0x0046]),
        (0x1D46E, &[0x0047]),
        (0x1D46F, &[0x0048]),
        (0x1D470, &[0x0049]),
        (0x1D471, &[0x004A]),
        (0x1D472, &[0x004B]),
        (0x1D473, &[0x004C]),
        (0x1D474, &[0x004D]),
        (0x1D475, &[0x004E]),
        (0x1D476, &[0x004F]),
        (0x1D477, &[0x0050]),
        (0x1D478, &[0x0051]),
        (0x1D479, &[0x0052]),
        (0x1D47A, &[0x0053]),
        (0x1D47B, &[0x0054]),
        (0x1D47C, &[0x0055]),
        (0x1D47D, &[0x0056]),
        (0x1D47E, &[0x0057]),
        (0x1D47F, &[0x0058]),
        (0x1D480, &[0x0059]),
        (0x1D481, &[0x005A]),
        (0x1D482, &[0x0061]),
        (0x1D483, &[0x0062]),
        (0x1D484, &[0x0063]),
        (0x1D485, &[0x0064]),
        (0x1D486, &[0x0065]),
        (0x1D487, &[0x0066]),
        (0x1D488, &[0x0067]),
        (0x1D489, &[0x0068]),
        (0x1D48A, &[0x0069]),
        (0x1D48B, &[0x006A]),
        (0x1D48C, &[0x006B]),
        (0x1D48D, &[0x006C]),
        (0x1D48E, &[0x006D]),
        (0x1D48F, &[0x006E]),
        (0x1D490, &[0x006F]),
        (0x1D491, &[0x0070]),
        (0x1D492, &[0x0071]),
        (0x1D493, &[0x0072]),
        (0x1D494, &[0x0073]),
        (0x1D495, &[0x0074]),
        (0x1D496, &[0x0075]),
        (0x1D497, &[0x0076]),
        (0x1D498, &[0x0077]),
        (0x1D499, &[0x0078]),
        (0x1D49A, &[0x0079]),
        (0x1D49B, &[0x007A]),
        (0x1D49C, &[0x0041]),
        (0x1D49E, &[0x0043]),
        (0x1D49F, &[0x0044]),
        (0x1D4A2, &[0x0047]),
        (0x1D4A5, &[0x004A]),
        (0x1D4A6, &[0x004B]),
        (0x1D4A9, &[0x004E]),
        (0x1D4AA, &[0x004F]),
        (0x1D4AB, &[0x0050]),
        (0x1D4AC, &[0x0051]),
        (0x1D4AE, &[0x0053]),
        (0x1D4AF, &[0x0054]),
        (0x1D4B0, &[0x0055]),
        (0x1D4B1, &[0x0056]),
        (0x1D4B2, &[0x0057]),
        (0x1D4B3, &[0x0058]),
        (0x1D4B4, &[0x0059]),
        (0x1D4B5, &[0x005A]),
        (0x1D4B6, &[0x0061]),
        (0x1D4B7, &[0x0062]),
        (0x1D4B8, &[0x0063]),
        (0x1D4B9, &[0x0064]),
        (0x1D4BB, &[0x0066]),
        (0x1D4BD, &[0x0068]),
        (0x1D4BE, &[0x0069]),
        (0x1D4BF, &[0x006A]),
        (0x1D4C0, &[0x006B]),
        (0x1D4C1, &[0x006C]),
        (0x1D4C2, &[0x006D]),
        (0x1D4C3, &[0x006E]),
        (0x1D4C5, &[0x0070]),
        (0x1D4C6, &[0x0071]),
        (0x1D4C7, &[0x0072]),
        (0x1D4C8, &[0x0073]),
        (0x1D4C9, &[0x0074]),
        (0x1D4CA, &[0x0075]),
        (0x1D4CB, &[0x0076]),
        (0x1D4CC, &[0x0077]),
        (0x1D4CD, &[0x0078]),
        (0x1D4CE, &[0x0079]),
        (0x1D4CF, &[0x007A]),
        (0x1D4D0, &[0x0041]),
        (0x1D4D1, &[0x0042]),
        (0x1D4D2, &[0x0043]),
        (0x1D4D3, &[0x0044]),
        (0x1D4D4, &[0x0045]),
        (0x1D4D5, &[0x0046]),
        (0x1D4D6, &[0x0047]),
        (0x1D4D7, &[0x0048]),
        (0x1D4D8, &[0x0049]),
        (0x1D4D9, &[0x004A]),
        (0x1D4DA, &[0x004B]),
        (0x1D4DB, &[0x004C]),
        (0x1D4DC, &[0x004D]),
        (0x1D4DD, &[0x004E]),
        (0x1D4DE, &[0x004F]),
        (0x1D4DF, &[0x0050]),
        (0x1D4E0, &[0x0051]),
        (0x1D4E1, &[0x0052]),
        (0x1D4E2, &[0x0053]),
        (0x1D4E3, &[0x0054]),
        (0x1D4E4, &[0x0055]),
        (0x1D4E5, &[0x0056]),
        (0x1D4E6, &[0x0057]),
        (0x1D4E7, &[0x0058]),
        (0x1D4E8, &[0x0059]),
        (0x1D4E9, &[0x005A]),
        (0x1D4EA, &[0x0061]),
        (0x1D4EB, &[0x0062]),
        (0x1D4EC, &[0x0063]),
        (0x1D4ED, &[0x0064]),
        (0x1D4EE, &[0x0065]),
        (0x1D4EF, &[0x0066]),
        (0x1D4F0, &[0x0067]),
        (0x1D4F1, &[0x0068]),
        (0x1D4F2, &[0x0069]),
        (0x1D4F3, &[0x006A]),
        (0x1D4F4, &[0x006B]),
        (0x1D4F5, &[0x006C]),
        (0x1D4F6, &[0x006D]),
        (0x1D4F7, &[0x006E]),
        (0x1D4F8, &[0x006F]),
        (0x1D4F9, &[0x0070]),
        (0x1D4FA, &[0x0071]),
        (0x1D4FB, &[0x0072]),
        (0x1D4FC, &[0x0073]),
        (0x1D4FD, &[0x0074]),
        (0x1D4FE, &[0x0075]),
        (0x1D4FF, &[0x0076]),
        (0x1D500, &[0x0077]),
        (0x1D501, &[0x0078]),
        (0x1D502, &[0x0079]),
        (0x1D503, &[0x007A]),
        (0x1D504, &[0x0041]),
        (0x1D505, &[0x0042]),
        (0x1D507, &[0x0044]),
        (0x1D508, &[0x0045]),
        (0x1D509, &[0x0046]),
        (0x1D50A, &[0x0047]),
        (0x1D50D, &[0x004A]),
        (0x1D50E, &[0x004B]),
        (0x1D50F, &[0x004C]),
        (0x1D510, &[0x004D]),
        (0x1D511, &[0x004E]),
        (0x1D512, &[0x004F]),
        (0x1D513, &[0x0050]),
        (0x1D514, &[0x0051]),
        (0x1D516, &[0x0053]),
        (0x1D517, &[0x0054]),
        (0x1D518, &[0x0055]),
        (0x1D519, &[0x0056]),
        (0x1D51A, &[0x0057]),
        (0x1D51B, &[0x0058]),
        (0x1D51C, &[0x0059]),
        (0x1D51E, &[0x0061]),
        (0x1D51F, &[0x0062]),
        (0x1D520, &[0x0063]),
        (0x1D521, &[0x0064]),
        (0x1D522, &[0x0065]),
        (0x1D523, &[0x0066]),
        (0x1D524, &[0x0067]),
        (0x1D525, &[0x0068]),
        (0x1D526, &[0x0069]),
        (0x1D527, &[0x006A]),
        (0x1D528, &[0x006B]),
        (0x1D529, &[0x006C]),
        (0x1D52A, &[0x006D]),
        (0x1D52B, &[0x006E]),
        (0x1D52C, &[0x006F]),
        (0x1D52D, &[0x0070]),
        (0x1D52E, &[0x0071]),
        (0x1D52F, &[0x0072]),
        (0x1D530, &[0x0073]),
        (0x1D531, &[0x0074]),
        (0x1D532, &[0x0075]),
        (0x1D533, &[0x0076]),
        (0x1D534, &[0x0077]),
        (0x1D535, &[0x0078]),
        (0x1D536, &[0x0079]),
        (0x1D537, &[0x007A]),
        (0x1D538, &[0x0041]),
        (0x1D539, &[0x0042]),
        (0x1D53B, &[0x0044]),
        (0x1D53C, &[0x0045]),
        (0x1D53D, &[0x0046]),
        (0x1D53E, &[0x0047]),
        (0x1D540, &[0x0049]),
        (0x1D541, &[0x004A]),
        (0x1D542, &[0x004B]),
        (0x1D543, &[0x004C]),
        (0x1D544, &[0x004D]),
        (0x1D546, &[0x004F]),
        (0x1D54A, &[0x0053]),
        (0x1D54B, &[0x0054]),
        (0x1D54C, &[0x0055]),
        (0x1D54D, &[0x0056]),
        (0x1D54E, &[0x0057]),
        (0x1D54F, &[0x0058]),
        (0x1D550, &[0x0059]),
        (0x1D552, &[0x0061]),
        (0x1D553, &[0x0062]),
        (0x1D554, &[0x0063]),
        (0x1D555, &[0x0064]),
        (0x1D556, &[0x0065]),
        (0x1D557, &[0x0066]),
        (0x1D558, &[0x0067]),
        (0x1D559, &[0x0068]),
        (0x1D55A, &[0x0069]),
        (0x1D55B, &[0x006A]),
        (0x1D55C, &[0x006B]),
        (0x1D55D, &[0x006C]),
        (0x1D55E, &[0x006D]),
        (0x1D55F, &[0x006E]),
        (0x1D560, &[0x006F]),
        (0x1D561, &[0x0070]),
        (0x1D562, &[0x0071]),
        (0x1D563, &[0x0072]),
        (0x1D564, &[0x0073]),
        (0x1D565, &[0x0074]),
        (0x1D566, &[0x0075]),
        (0x1D567, &[0x0076]),
        (0x1D568, &[0x0077]),
        (0x1D569, &[0x0078]),
        (0x1D56A, &[0x0079]),
        (0x1D56B, &[0x007A]),
        (0x1D56C, &[0x0041]),
        (0x1D56D, &[0x0042]),
        (0x1D56E, &[0x0043]),
        (0x1D56F, &[0x0044]),
        (0x1D570, &[0x0045]),
        (0x1D571, &[0x0046]),
        (0x1D572, &[0x0047]),
        (0x1D573, &[0x0048]),
        (0x1D574, &[0x0049]),
        (0x1D575, &[0x004A]),
        (0x1D576, &[0x004B]),
        (0x1D577, &[0x004C]),
        (0x1D578, &[0x004D]),
        (0x1D579, &[0x004E]),
        (0x1D57A, &[0x004F]),
        (0x1D57B, &[0x0050]),
        (0x1D57C, &[0x0051]),
        (0x1D57D, &[0x0052]),
        (0x1D57E, &[0x0053]),
        (0x1D57F, &[0x0054]),
        (0x1D580, &[0x0055]),
        (0x1D581, &[0x0056]),
        (0x1D582, &[0x0057]),
        (0x1D583, &[0x0058]),
        (0x1D584, &[0x0059]),
        (0x1D585, &[0x005A]),
        (0x1D586, &[0x0061]),
        (0x1D587, &[0x0062]),
        (0x1D588, &[0x0063]),
        (0x1D589, &[0x0064]),
        (0x1D58A, &[0x0065]),
        (0x1D58B, &[0x0066]),
        (0x1D58C, &[0x0067]),
        (0x1D58D, &[0x0068]),
        (0x1D58E, &[0x0069]),
        (0x1D58F, &[0x006A]),
        (0x1D590, &[0x006B]),
        (0x1D591, &[0x006C]),
        (0x1D592, &[0x006D]),
        (0x1D593, &[0x006E]),
        (0x1D594, &[0x006F]),
        (0x1D595, &[0x0070]),
        (0x1D596, &[0x0071]),
        (0x1D597, &[0x0072]),
        (0x1D598, &[0x0073]),
        (0x1D599, &[0x0074]),
        (0x1D59A, &[0x0075]),
        (0x1D59B, &[0x0076]),
        (0x1D59C, &[0x0077]),
        (0x1D59D, &[0x0078]),
        (0x1D59E, &[0x0079]),
        (0x1D59F, &[0x007A]),
        (0x1D5A0, &[0x0041]),
        (0x1D5A1, &[0x0042]),
        (0x1D5A2, &[0x0043]),
        (0x1D5A3, &[0x0044]),
        (0x1D5A4, &[0x0045]),
        (0x1D5A5, &[0x0046]),
        (0x1D5A6, &[0x0047]),
        (0x1D5A7, &[0x0048]),
        (0x1D5A8, &[0x0049]),
        (0x1D5A9, &[0x004A]),
        (0x1D5AA, &[0x004B]),
        (0x1D5AB, &[0x004C]),
        (0x1D5AC, &[0x004D]),
        (0x1D5AD, &[0x004E]),
        (0x1D5AE, &[0x004F]),
        (0x1D5AF, &[0x0050]),
        (0x1D5B0, &[0x0051]),
        (0x1D5B1, &[0x0052]),
        (0x1D5B2, &[0x0053]),
        (0x1D5B3, &[0x0054]),
        (0x1D5B4, &[0x0055]),
        (0x1D5B5, &[0x0056]),
        (0x1D5B6, &[0x0057]),
        (0x1D5B7, &[0x0058]),
        (0x1D5B8, &[0x0059]),
        (0x1D5B9, &[0x005A]),
        (0x1D5BA, &[0x0061]),
        (0x1D5BB, &[0x0062]),
        (0x1D5BC, &[0x0063]),
        (0x1D5BD, &[0x0064]),
        (0x1D5BE, &[0x0065]),
        (0x1D5BF, &[0x0066]),
        (0x1D5C0, &[0x0067]),
        (0x1D5C1, &[0x0068]),
        (0x1D5C2, &[0x0069]),
        (0x1D5C3, &[0x006A]),
        (0x1D5C4, &[0x006B]),
        (0x1D5C5, &[0x006C]),
        (0x1D5C6, &[0x006D]),
        (0x1D5C7, &[0x006E]),
        (0x1D5C8, &[0x006F]),
        (0x1D5C9, &[0x0070]),
        (0x1D5CA, &[0x0071]),
        (0x1D5CB, &[0x0072]),
        (0x1D5CC, &[0x0073]),
        (0x1D5CD, &[0x0074]),
        (0x1D5CE, &[0x0075]),
        (0x1D5CF, &[0x0076]),
        (0x1D5D0, &[0x0077]),
        (0x1D5D1, &[0x0078]),
        (0x1D5D2, &[0x0079]),
        (0x1D5D3, &[0x007A]),
        (0x1D5D4, &[0x0041]),
        (0x1D5D5, &[0x0042]),
        (0x1D5D6, &[0x0043]),
        (0x1D5D7, &[0x0044]),
        (0x1D5D8, &[0x0045]),
        (0x1D5D9, &[0x0046]),
        (0x1D5DA, &[0x0047]),
        (0x1D5DB, &[0x0048]),
        (0x1D5DC, &[0x0049]),
        (0x1D5DD, &[0x004A]),
        (0x1D5DE, &[0x004B]),
        (0x1D5DF, &[0x004C]),
        (0x1D5E0, &[0x004D]),
        (0x1D5E1, &[0x004E]),
        (0x1D5E2, &[0x004F]),
        (0x1D5E3, &[0x0050]),
        (0x1D5E4, &[0x0051]),
        (0x1D5E5, &[0x0052]),
        (0x1D5E6, &[0x0053]),
        (0x1D5E7, &[0x0054]),
        (0x1D5E8, &[0x0055]),
        (0x1D5E9, &[0x0056]),
        (0x1D5EA, &[0x0057]),
        (0x1D5EB, &[0x0058]),
        (0x1D5EC, &[0x0059]),
        (0x1D5ED, &[0x005A]),
        (0x1D5EE, &[0x0061]),
        (0x1D5EF, &[0x0062]),
        (0x1D5F0, &[0x0063]),
        (0x1D5F1, &[0x0064]),
        (0x1D5F2, &[0x0065]),
        (0x1D5F3, &[0x0066]),
        (0x1D5F4, &[0x0067]),
        (0x1D5F5, &[0x0068]),
        (0x1D5F6, &[0x0069]),
        (0x1D5F7, &[0x006A]),
        (0x1D5F8, &[0x006B]),
        (0x1D5F9, &[0x006C]),
        (0x1D5FA, &[0x006D]),
        (0x1D5FB, &[0x006E]),
        (0x1D5FC, &[0x006F]),
        (0x1D5FD, &[0x0070]),
        (0x1D5FE, &[0x0071]),
        (0x1D5FF, &[0x0072]),
        (0x1D600, &[0x0073]),
        (0x1D601, &[0x0074]),
        (0x1D602, &[0x0075]),
        (0x1D603, &[0x0076]),
        (0x1D604, &[0x0077]),
        (0x1D605, &[0x0078]),
        (0x1D606, &[0x0079]),
        (0x1D607, &[0x007A]),
        (0x1D608, &[0x0041]),
        (0x1D609, &[0x0042]),
        (0x1D60A, &[0x0043]),
        (0x1D60B, &[0x0044]),
        (0x1D60C, &[0x0045]),
        (0x1D60D, &[0x0046]),
        (0x1D60E, &[0x0047]),
        (0x1D60F, &[0x0048]),
        (0x1D610, &[0x0049]),
        (0x1D611, &[0x004A]),
        (0x1D612, &[0x004B]),
        (0x1D613, &[0x004C]),
        (0x1D614, &[0x004D]),
        (0x1D615, &[0x004E]),
        (0x1D616, &[0x004F]),
        (0x1D617, &[0x0050]),
        (0x1D618, &[0x0051]),
        (0x1D619, &[0x0052]),
        (0x1D61A, &[0x0053]),
        (0x1D61B, &[0x0054]),
        (0x1D61C, &[0x0055]),
        (0x1D61D, &[0x0056]),
        (0x1D61E, &[0x0057]),
        (0x1D61F, &[0x0058]),
        (0x1D620, &[0x0059]),
        (0x1D621, &[0x005A]),
        (0x1D622, &[0x0061]),
        (0x1D623, &[0x0062]),
        (0x1D624, &[0x0063]),
        (0x1D625, &[0x0064]),
        (0x1D626, &[0x0065]),
        (0x1D627, &[0x0066]),
        (0x1D628, &[0x0067]),
        (0x1D629, &[0x0068]),
        (0x1D62A, &[0x0069]),
        (0x1D62B, &[0x006A]),
        (0x1D62C, &[0x006B]),
        (0x1D62D, &[0x006C]),
        (0x1D62E, &[0x006D]),
        (0x1D62F, &[0x006E]),
        (0x1D630, &[0x006F]),
        (0x1D631, &[0x0070]),
        (0x1D632, &[0x0071]),
        (0x1D633, &[0x0072]),
        (0x1D634, &[0x0073]),
        (0x1D635, &[0x0074]),
        (0x1D636, &[0x0075]),
        (0x1D637, &[0x0076]),
        (0x1D638, &[0x0077]),
        (0x1D639, &[0x0078]),
        (0x1D63A, &[0x0079]),
        (0x1D63B, &[0x007A]),
        (0x1D63C, &[0x0041]),
        (0x1D63D, &[0x0042]),
        (0x1D63E, &[0x0043]),
        (0x1D63F, &[0x0044]),
        (0x1D640, &[0x0045]),
        (0x1D641, &[0x0046]),
        (0x1D642, &[0x0047]),
        (0x1D643, &[0x0048]),
        (0x1D644, &[0x0049]),
        (0x1D645, &[0x004A]),
        (0x1D646, &[0x004B]),
        (0x1D647, &[0x004C]),
        (0x1D648, &[0x004D]),
        (0x1D649, &[0x004E]),
        (0x1D64A, &[0x004F]),
        (0x1D64B, &[0x0050]),
        (0x1D64C, &[0x0051]),
        (0x1D64D, &[0x0052]),
        (0x1D64E, &[0x0053]),
        (0x1D64F, &[0x0054]),
        (0x1D650, &[0x0055]),
        (0x1D651, &[0x0056]),
        (0x1D652, &[0x0057]),
        (0x1D653, &[0x0058]),
        (0x1D654, &[0x0059]),
        (0x1D655, &[0x005A]),
        (0x1D656, &[0x0061]),
        (0x1D657, &[0x0062]),
        (0x1D658, &[0x0063]),
        (0x1D659, &[0x0064]),
        (0x1D65A, &[0x0065]),
        (0x1D65B, &[0x0066]),
        (0x1D65C, &[0x0067]),
        (0x1D65D, &[0x0068]),
        (0x1D65E, &[0x0069]),
        (0x1D65F, &[0x006A]),
        (0x1D660, &[0x006B]),
        (0x1D661, &[0x006C]),
        (0x1D662, &[0x006D]),
        (0x1D663, &[0x006E]),
        (0x1D664, &[0x006F]),
        (0x1D665, &[0x0070]),
        (0x1D666, &[0x0071]),
        (0x1D667, &[0x0072]),
        (0x1D668, &[0x0073]),
        (0x1D669, &[0x0074]),
        (0x1D66A, &[0x0075]),
        (0x1D66B, &[0x0076]),
        (0x1D66C, &[0x0077]),
        (0x1D66D, &[0x0078]),
        (0x1D66E, &[0x0079]),
        (0x1D66F, &[0x007A]),
        (0x1D670, &[0x0041]),
        (0x1D671, &[0x0042]),
        (0x1D672, &[0x0043]),
        (0x1D673, &[0x0044]),
        (0x1D674, &[0x0045]),
        (0x1D675, &[0x0046]),
        (0x1D676, &[0x0047]),
        (0x1D677, &[0x0048]),
        (0x1D678, &[0x0049]),
        (0x1D679, &[0x004A]),
        (0x1D67A, &[0x004B]),
        (0x1D67B, &[0x004C]),
        (0x1D67C, &[0x004D]),
        (0x1D67D, &[0x004E]),
        (0x1D67E, &[0x004F]),
        (0x1D67F, &[0x0050]),
        (0x1D680, &[0x0051]),
        (0x1D681, &[0x0052]),
        (0x1D682, &[0x0053]),
        (0x1D683, &[0x0054]),
        (0x1D684, &[0x0055]),
        (0x1D685, &[0x0056]),
        (0x1D686, &[0x0057]),
        (0x1D687, &[0x0058]),
        (0x1D688, &[0x0059]),
        (0x1D689, &[0x005A]),
        (0x1D68A, &[0x0061]),
        (0x1D68B, &[0x0062]),
        (0x1D68C, &[0x0063]),
        (0x1D68D, &[0x0064]),
        (0x1D68E, &[0x0065]),
        (0x1D68F, &[0x0066]),
        (0x1D690, &[0x0067]),
        (0x1D691, &[0x0068]),
        (0x1D692, &[0x0069]),
        (0x1D693, &[0x006A]),
        (0x1D694, &[0x006B]),
        (0x1D695, &[0x006C]),
        (0x1D696, &[0x006D]),
        (0x1D697, &[0x006E]),
        (0x1D698, &[0x006F]),
        (0x1D699, &[0x0070]),
        (0x1D69A, &[0x0071]),
        (0x1D69B, &[0x0072]),
        (0x1D69C, &[0x0073]),
        (0x1D69D, &[0x0074]),
        (0x1D69E, &[0x0075]),
        (0x1D69F, &[0x0076]),
        (0x1D6A0, &[0x0077]),
        (0x1D6A1, &[0x0078]),
        (0x1D6A2, &[0x0079]),
        (0x1D6A3, &[0x007A]),
        (0x1D6A4, &[0x0131]),
        (0x1D6A5, &[0x0237]),
        (0x1D6A8, &[0x0391]),
        (0x1D6A9, &[0x0392]),
        (0x1D6AA, &[0x0393]),
        (0x1D6AB, &[0x0394]),
        (0x1D6AC, &[0x0395]),
        (0x1D6AD, &[0x0396]),
        (0x1D6AE, &[0x0397]),
        (0x1D6AF, &[0x0398]),
        (0x1D6B0, &[0x0399]),
        (0x1D6B1, &[0x039A]),
        (0x1D6B2, &[0x039B]),
        (0x1D6B3, &[0x039C]),
        (0x1D6B4, &[0x039D]),
        (0x1D6B5, &[0x039E]),
        (0x1D6B6, &[0x039F]),
        (0x1D6B7, &[0x03A0]),
        (0x1D6B8, &[0x03A1]),
        (0x1D6B9, &[0x03F4]),
        (0x1D6BA, &[0x03A3]),
        (0x1D6BB, &[0x03A4]),
        (0x1D6BC, &[0x03A5]),
        (0x1D6BD, &[0x03A6]),
        (0x1D6BE, &[0x03A7]),
        (0x1D6BF, &[0x03A8]),
        (0x1D6C0, &[0x03A9]),
        (0x1D6C1, &[0x2207]),
        (0x1D6C2, &[0x03B1]),
        (0x1D6C3, &[0x03B2]),
        (0x1D6C4, &[0x03B3]),
        (0x1D6C5, &[0x03B4]),
        (0x1D6C6, &[0x03B5]),
        (0x1D6C7, &[0x03B6]),
        (0x1D6C8, &[0x03B7]),
        (0x1D6C9, &[0x03B8]),
        (0x1D6CA, &[0x03B9]),
        (0x1D6CB, &[0x03BA]),
        (0x1D6CC, &[0x03BB]),
        (0x1D6CD, &[0x03BC]),
        (0x1D6CE, &[0x03BD]),
        (0x1D6CF, &[0x03BE]),
        (0x1D6D0, &[0x03BF]),
        (0x1D6D1, &[0x03C0]),
        (0x1D6D2, &[0x03C1]),
        (0x1D6D3, &[0x03C2]),
        (0x1D6D4, &[0x03C3]),
        (0x1D6D5, &[0x03C4]),
        (0x1D6D6, &[0x03C5]),
        (0x1D6D7, &[0x03C6]),
        (0x1D6D8, &[0x03C7]),
        (0x1D6D9, &[0x03C8]),
        (0x1D6DA, &[0x03C9]),
        (0x1D6DB, &[0x2202]),
        (0x1D6DC, &[0x03F5]),
        (0x1D6DD, &[0x03D1]),
        (0x1D6DE, &[0x03F0]),
        (0x1D6DF, &[0x03D5]),
        (0x1D6E0, &[0x03F1]),
        (0x1D6E1, &[0x03D6]),
        (0x1D6E2, &[0x0391]),
        (0x1D6E3, &[0x0392]),
        (0x1D6E4, &[0x0393]),
        (0x1D6E5, &[0x0394]),
        (0x1D6E6, &[0x0395]),
        (0x1D6E7, &[0x0396]),
        (0x1D6E8, &[0x0397]),
        (0x1D6E9, &[0x0398]),
        (0x1D6EA, &[0x0399]),
        (0x1D6EB, &[0x039A]),
        (0x1D6EC, &[0x039B]),
        (0x1D6ED, &[0x039C]),
        (0x1D6EE, &[0x039D]),
        (0x1D6EF, &[0x039E]),
        (0x1D6F0, &[0x039F]),
        (0x1D6F1, &[0x03A0]),
        (0x1D6F2, &[0x03A1]),
        (0x1D6F3, &[0x03F4]),
        (0x1D6F4, &[0x03A3]),
        (0x1D6F5, &[0x03A4]),
        (0x1D6F6, &[0x03A5]),
        (0x1D6F7, &[0x03A6]),
        (0x1D6F8, &[0x03A7]),
        (0x1D6F9, &[0x03A8]),
        (0x1D6FA, &[0x03A9]),
        (0x1D6FB, &[0x2207]),
        (0x1D6FC, &[0x03B1]),
        (0x1D6FD, &[0x03B2]),
        (0x1D6FE, &[0x03B3]),
        (0x1D6FF, &[0x03B4]),
        (0x1D700, &[0x03B5]),
        (0x1D701, &[0x03B6]),
        (0x1D702, &[0x03B7]),
        (0x1D703, &[0x03B8]),
        (0x1D704, &[0x03B9]),
        (0x1D705, &[0x03BA]),
        (0x1D706, &[0x03BB]),
        (0x1D707, &[0x03BC]),
        (0x1D708, &[0x03BD]),
        (0x1D709, &[0x03BE]),
        (0x1D70A, &[0x03BF]),
        (0x1D70B, &[0x03C0]),
        (0x1D70C, &[0x03C1]),
        (0x1D70D, &[0x03C2]),
        (0x1D70E, &[0x03C3]),
        (0x1D70F, &[0x03C4]),
        (0x1D710, &[0x03C5]),
        (0x1D711, &[0x03C6]),
        (0x1D712, &[0x03C7]),
        (0x1D713, &[0x03C8]),
        (0x1D714, &[0x03C9]),
        (0x1D715, &[0x2202]),
        (0x1D716, &[0x03F5]),
        (0x1D717, &[0x03D1]),
        (0x1D718, &[0x03F0]),
        (0x1D719, &[0x03D5]),
        (0x1D71A, &[0x03F1]),
        (0x1D71B, &[0x03D6]),
        (0x1D71C, &[0x0391]),
        (0x1D71D, &[0x0392]),
        (0x1D71E, &[0x0393]),
        (0x1D71F, &[0x0394]),
        (0x1D720, &[0x0395]),
        (0x1D721, &[0x0396]),
        (0x1D722, &[0x0397]),
        (0x1D723, &[0x0398]),
        (0x1D724, &[0x0399]),
        (0x1D725, &[0x039A]),
        (0x1D726, &[0x039B]),
        (0x1D727, &[0x039C]),
        (0x1D728, &[0x039D]),
        (0x1D729, &[0x039E]),
        (0x1D72A, &[0x039F]),
        (0x1D72B, &[0x03A0]),
        (0x1D72C, &[0x03A1]),
        (0x1D72D, &[0x03F4]),
        (0x1D72E, &[0x03A3]),
        (0x1D72F, &[0x03A4]),
        (0x1D730, &[0x03A5]),
        (0x1D731, &[0x03A6]),
        (0x1D732, &[0x03A7]),
        (0x1D733, &[0x03A8]),
        (0x1D734, &[0x03A9]),
        (0x1D735, &[0x2207]),
        (0x1D736, &[0x03B1]),
        (0x1D737, &[0x03B2]),
        (0x1D738, &[0x03B3]),
        (0x1D739, &[0x03B4]),
        (0x1D73A, &[0x03B5]),
        (0x1D73B, &[0x03B6]),
        (0x1D73C, &[0x03B7]),
        (0x1D73D, &[0x03B8]),
        (0x1D73E, &[0x03B9]),
        (0x1D73F, &[0x03BA]),
        (0x1D740, &[0x03BB]),
        (0x1D741, &[0x03BC]),
        (0x1D742, &[0x03BD]),
        (0x1D743, &[0x03BE]),
        (0x1D744, &[0x03BF]),
        (0x1D745, &[0x03C0]),
        (0x1D746, &[0x03C1]),
        (0x1D747, &[0x03C2]),
        (0x1D748, &[0x03C3]),
        (0x1D749, &[0x03C4]),
        (0x1D74A, &[0x03C5]),
        (0x1D74B, &[0x03C6]),
        (0x1D74C, &[0x03C7]),
        (0x1D74D, &[0x03C8]),
        (0x1D74E, &[0x03C9]),
        (0x1D74F, &[0x2202]),
        (0x1D750, &[0x03F5]),
        (0x1D751, &[0x03D1]),
        (0x1D752, &[0x03F0]),
        (0x1D753, &[0x03D5]),
        (0x1D754, &[0x03F1]),
        (0x1D755, &[0x03D6]),
        (0x1D756, &[0x0391]),
        (0x1D757, &[0x0392]),
        (0x1D758, &[0x0393]),
        (0x1D759, &[0x0394]),
        (0x1D75A, &[0x0395]),
        (0x1D75B, &[0x0396]),
        (0x1D75C, &[0x0397]),
        (0x1D75D, &[0x0398]),
        (0x1D75E, &[0x0399]),
        (0x1D75F, &[0x039A]),
        (0x1D760, &[0x039B]),
        (0x1D761, &[0x039C]),
        (0x1D762, &[0x039D]),
        (0x1D763, &[0x039E]),
        (0x1D764, &[0x039F]),
        (0x1D765, &[0x03A0]),
        (0x1D766, &[0x03A1]),
        (0x1D767, &[0x03F4]),
        (0x1D768, &[0x03A3]),
        (0x1D769, &[0x03A4]),
        (0x1D76A, &[0x03A5]),
        (0x1D76B, &[0x03A6]),
        (0x1D76C, &[0x03A7]),
        (0x1D76D, &[0x03A8]),
        (0x1D76E, &[0x03A9]),
        (0x1D76F, &[0x2207]),
        (0x1D770, &[0x03B1]),
        (0x1D771, &[0x03B2]),
        (0x1D772, &[0x03B3]),
        (0x1D773, &[0x03B4]),
        (0x1D774, &[0x03B5]),
        (0x1D775, &[0x03B6]),
        (0x1D776, &[0x03B7]),
        (0x1D777, &[0x03B8]),
        (0x1D778, &[0x03B9]),
        (0x1D779, &[0x03BA]),
        (0x1D77A, &[0x03BB]),
        (0x1D77B, &[0x03BC]),
        (0x1D77C, &[0x03BD]),
        (0x1D77D, &[0x03BE]),
        (0x1D77E, &[0x03BF]),
        (0x1D77F, &[0x03C0]),
        (0x1D780, &[0x03C1]),
        (0x1D781, &[0x03C2]),
        (0x1D782, &[0x03C3]),
        (0x1D783, &[0x03C4]),
        (0x1D784, &[0x03C5]),
        (0x1D785, &[0x03C6]),
        (0x1D786, &[0x03C7]),
        (0x1D787, &[0x03C8]),
        (0x1D788, &[0x03C9]),
        (0x1D789, &[0x2202]),
        (0x1D78A, &[0x03F5]),
        (0x1D78B, &[0x03D1]),
        (0x1D78C, &[0x03F0]),
        (0x1D78D, &[0x03D5]),
        (0x1D78E, &[0x03F1]),
        (0x1D78F, &[0x03D6]),
        (0x1D790, &[0x0391]),
        (0x1D791, &[0x0392]),
        (0x1D792, &[0x0393]),
        (0x1D793, &[0x0394]),
        (0x1D794, &[0x0395]),
        (0x1D795, &[0x0396]),
        (0x1D796, &[0x0397]),
        (0x1D797, &[0x0398]),
        (0x1D798, &[0x0399]),
        (0x1D799, &[0x039A]),
        (0x1D79A, &[0x039B]),
        (0x1D79B, &[0x039C]),
        (0x1D79C, &[0x039D]),
        (0x1D79D, &[0x039E]),
        (0x1D79E, &[0x039F]),
        (0x1D79F, &[0x03A0]),
        (0x1D7A0, &[0x03A1]),
        (0x1D7A1, &[0x03F4]),
        (0x1D7A2, &[0x03A3]),
        (0x1D7A3, &[0x03A4]),
        (0x1D7A4, &[0x03A5]),
        (0x1D7A5, &[0x03A6]),
        (0x1D7A6, &[0x03A7]),
        (0x1D7A7, &[0x03A8]),
        (0x1D7A8, &[0x03A9]),
        (0x1D7A9, &[0x2207]),
        (0x1D7AA, &[0x03B1]),
        (0x1D7AB, &[0x03B2]),
        (0x1D7AC, &[0x03B3]),
        (0x1D7AD, &[0x03B4]),
        (0x1D7AE, &[0x03B5]),
        (0x1D7AF, &[0x03B6]),
        (0x1D7B0, &[0x03B7]),
        (0x1D7B1, &[0x03B8]),
        (0x1D7B2, &[0x03B9]),
        (0x1D7B3, &[0x03BA]),
        (0x1D7B4, &[0x03BB]),
        (0x1D7B5, &[0x03BC]),
        (0x1D7B6, &[0x03BD]),
        (0x1D7B7, &[0x03BE]),
        (0x1D7B8, &[0x03BF]),
        (0x1D7B9, &[0x03C0]),
        (0x1D7BA, &[0x03C1]),
        (0x1D7BB, &[0x03C2]),
        (0x1D7BC, &[0x03C3]),
        (0x1D7BD, &[0x03C4]),
        (0x1D7BE, &[0x03C5]),
        (0x1D7BF, &[0x03C6]),
        (0x1D7C0, &[0x03C7]),
        (0x1D7C1, &[0x03C8]),
        (0x1D7C2, &[0x03C9]),
        (0x1D7C3, &[0x2202]),
        (0x1D7C4, &[0x03F5]),
        (0x1D7C5, &[0x03D1]),
        (0x1D7C6, &[0x03F0]),
        (0x1D7C7, &[0x03D5]),
        (0x1D7C8, &[0x03F1]),
        (0x1D7C9, &[0x03D6]),
        (0x1D7CA, &[0x03DC]),
        (0x1D7CB, &[0x03DD]),
        (0x1D7CE, &[0x0030]),
        (0x1D7CF, &[0x0031]),
        (0x1D7D0, &[0x0032]),
        (0x1D7D1, &[0x0033]),
        (0x1D7D2, &[0x0034]),
        (0x1D7D3, &[0x0035]),
        (0x1D7D4, &[0x0036]),
        (0x1D7D5, &[0x0037]),
        (0x1D7D6, &[0x0038]),
        (0x1D7D7, &[0x0039]),
        (0x1D7D8, &[0x0030]),
        (0x1D7D9, &[0x0031]),
        (0x1D7DA, &[0x0032]),
        (0x1D7DB, &[0x0033]),
        (0x1D7DC, &[0x0034]),
        (0x1D7DD, &[0x0035]),
        (0x1D7DE, &[0x0036]),
        (0x1D7DF, &[0x0037]),
        (0x1D7E0, &[0x0038]),
        (0x1D7E1, &[0x0039]),
        (0x1D7E2, &[0x0030]),
        (0x1D7E3, &[0x0031]),
        (0x1D7E4, &[0x0032]),
        (0x1D7E5, &[0x0033]),
        (0x1D7E6, &[0x0034]),
        (0x1D7E7, &[0x0035]),
        (0x1D7E8, &[0x0036]),
        (0x1D7E9, &[0x0037]),
        (0x1D7EA, &[0x0038]),
        (0x1D7EB, &[0x0039]),
        (0x1D7EC, &[0x0030]),
        (0x1D7ED, &[0x0031]),
        (0x1D7EE, &[0x0032]),
        (0x1D7EF, &[0x0033]),
        (0x1D7F0, &[0x0034]),
        (0x1D7F1, &[0x0035]),
        (0x1D7F2, &[0x0036]),
        (0x1D7F3, &[0x0037]),
        (0x1D7F4, &[0x0038]),
        (0x1D7F5, &[0x0039]),
        (0x1D7F6, &[0x0030]),
        (0x1D7F7, &[0x0031]),
        (0x1D7F8, &[0x0032]),
        (0x1D7F9, &[0x0033]),
        (0x1D7FA, &[0x0034]),
        (0x1D7FB, &[0x0035]),
        (0x1D7FC, &[0x0036]),
        (0x1D7FD, &[0x0037]),
        (0x1D7FE, &[0x0038]),
        (0x1D7FF, &[0x0039]),
        (0x1EE00, &[0x0627]),
        (0x1EE01, &[0x0628]),
        (0x1EE02, &[0x062C]),
        (0x1EE03, &[0x062F]),
        (0x1EE05, &[0x0648]),
        (0x1EE06, &[0x0632]),
        (0x1EE07, &[0x062D]),
        (0x1EE08, &[0x0637]),
        (0x1EE09, &[0x064A]),
        (0x1EE0A, &[0x0643]),
        (0x1EE0B, &[0x0644]),
        (0x1EE0C, &[0x0645]),
        (0x1EE0D, &[0x0646]),
        (0x1EE0E, &[0x0633]),
        (0x1EE0F, &[0x0639]),
        (0x1EE10, &[0x0641]),
        (0x1EE11, &[0x0635]),
        (0x1EE12, &[0x0642]),
        (0x1EE13, &[0x0631]),
        (0x1EE14, &[0x0634]),
        (0x1EE15, &[0x062A]),
        (0x1EE16, &[0x062B]),
        (0x1EE17, &[0x062E]),
        (0x1EE18, &[0x0630]),
        (0x1EE19, &[0x0636]),
        (0x1EE1A, &[0x0638]),
        (0x1EE1B, &[0x063A]),
        (0x1EE1C, &[0x066E]),
        (0x1EE1D, &[0x06BA]),
        (0x1EE1E, &[0x06A1]),
        (0x1EE1F, &[0x066F]),
        (0x1EE21, &[0x0628]),
        (0x1EE22, &[0x062C]),
        (0x1EE24, &[0x0647]),
        (0x1EE27, &[0x062D]),
        (0x1EE29, &[0x064A]),
        (0x1EE2A, &[0x0643]),
        (0x1EE2B, &[0x0644]),
        (0x1EE2C, &[0x0645]),
        (0x1EE2D, &[0x0646]),
        (0x1EE2E, &[0x0633]),
        (0x1EE2F, &[0x0639]),
        (0x1EE30, &[0x0641]),
        (0x1EE31, &[0x0635]),
        (0x1EE32, &[0x0642]),
        (0x1EE34, &[0x0634]),
        (0x1EE35, &[0x062A]),
        (0x1EE36, &[0x062B]),
        (0x1EE37, &[0x062E]),
        (0x1EE39, &[0x0636]),
        (0x1EE3B, &[0x063A]),
        (0x1EE42, &[0x062C]),
        (0x1EE47, &[0x062D]),
        (0x1EE49, &[0x064A]),
        (0x1EE4B, &[0x0644]),
        (0x1EE4D, &[0x0646]),
        (0x1EE4E, &[0x0633]),
        (0x1EE4F, &[0x0639]),
        (0x1EE51, &[0x0635]),
        (0x1EE52, &[0x0642]),
        (0x1EE54, &[0x0634]),
        (0x1EE57, &[0x062E]),
        (0x1EE59, &[0x0636]),
        (0x1EE5B, &[0x063A]),
        (0x1EE5D, &[0x06BA]),
        (0x1EE5F, &[0x066F]),
        (0x1EE61, &[0x0628]),
        (0x1EE62, &[0x062C]),
        (0x1EE64, &[0x0647]),
        (0x1EE67, &[0x062D]),
        (0x1EE68, &[0x0637]),
        (0x1EE69, &[0x064A]),
        (0x1EE6A, &[0x0643]),
        (0x1EE6C, &[0x0645]),
        (0x1EE6D, &[0x0646]),
        (0x1EE6E, &[0x0633]),
        (0x1EE6F, &[0x0639]),
        (0x1EE70, &[0x0641]),
        (0x1EE71, &[0x0635]),
        (0x1EE72, &[0x0642]),
        (0x1EE74, &[0x0634]),
        (0x1EE75, &[0x062A]),
        (0x1EE76, &[0x062B]),
        (0x1EE77, &[0x062E]),
        (0x1EE79, &[0x0636]),
        (0x1EE7A, &[0x0638]),
        (0x1EE7B, &[0x063A]),
        (0x1EE7C, &[0x066E]),
        (0x1EE7E, &[0x06A1]),
        (0x1EE80, &[0x0627]),
        (0x1EE81, &[0x0628]),
        (0x1EE82, &[0x062C]),
        (0x1EE83, &[0x062F]),
        (0x1EE84, &[0x0647]),
        (0x1EE85, &[0x0648]),
        (0x1EE86, &[0x0632]),
        (0x1EE87, &[0x062D]),
        (0x1EE88, &[0x0637]),
        (0x1EE89, &[0x064A]),
        (0x1EE8B, &[0x0644]),
        (0x1EE8C, &[0x0645]),
        (0x1EE8D, &[0x0646]),
        (0x1EE8E, &[0x0633]),
        (0x1EE8F, &[0x0639]),
        (0x1EE90, &[0x0641]),
        (0x1EE91, &[0x0635]),
        (0x1EE92, &[0x0642]),
        (0x1EE93, &[0x0631]),
        (0x1EE94, &[0x0634]),
        (0x1EE95, &[0x062A]),
        (0x1EE96, &[0x062B]),
        (0x1EE97, &[0x062E]),
        (0x1EE98, &[0x0630]),
        (0x1EE99, &[0x0636]),
        (0x1EE9A, &[0x0638]),
        (0x1EE9B, &[0x063A]),
        (0x1EEA1, &[0x0628]),
        (0x1EEA2, &[0x062C]),
        (0x1EEA3, &[0x062F]),
        (0x1EEA5, &[0x0648]),
        (0x1EEA6, &[0x0632]),
        (0x1EEA7, &[0x062D]),
        (0x1EEA8, &[0x0637]),
        (0x1EEA9, &[0x064A]),
        (0x1EEAB, &[0x0644]),
        (0x1EEAC, &[0x0645]),
        (0x1EEAD, &[0x0646]),
        (0x1EEAE, &[0x0633]),
        (0x1EEAF, &[0x0639]),
        (0x1EEB0, &[0x0641]),
        (0x1EEB1, &[0x0635]),
        (0x1EEB2, &[0x0642]),
        (0x1EEB3, &[0x0631]),
        (0x1EEB4, &[0x0634]),
        (0x1EEB5, &[0x062A]),
        (0x1EEB6, &[0x062B]),
        (0x1EEB7, &[0x062E]),
        (0x1EEB8, &[0x0630]),
        (0x1EEB9, &[0x0636]),
        (0x1EEBA, &[0x0638]),
        (0x1EEBB, &[0x063A]),
        (0x1F100, &[0x0030, 0x002E]),
        (0x1F101, &[0x0030, 0x002C]),
        (0x1F102, &[0x0031, 0x002C]),
        (0x1F103, &[0x0032, 0x002C]),
        (0x1F104, &[0x0033, 0x002C]),
        (0x1F105, &[0x0034, 0x002C]),
        (0x1F106, &[0x0035, 0x002C]),
        (0x1F107, &[0x0036, 0x002C]),
        (0x1F108, &[0x0037, 0x002C]),
        (0x1F109, &[0x0038, 0x002C]),
        (0x1F10A, &[0x0039, 0x002C]),
        (0x1F110, &[0x0028, 0x0041, 0x0029]),
        (0x1F111, &[0x0028, 0x0042, 0x0029]),
        (0x1F112, &[0x0028, 0x0043, 0x0029]),
        (0x1F113, &[0x0028, 0x0044, 0x0029]),
        (0x1F114, &[0x0028, 0x0045, 0x0029]),
        (0x1F115, &[0x0028, 0x0046, 0x0029]),
        (0x1F116, &[0x0028, 0x0047, 0x0029]),
        (0x1F117, &[0x0028, 0x0048, 0x0029]),
        (0x1F118, &[0x0028, 0x0049, 0x0029]),
        (0x1F119, &[0x0028, 0x004A, 0x0029]),
        (0x1F11A, &[0x0028, 0x004B, 0x0029]),
        (0x1F11B, &[0x0028, 0x004C, 0x0029]),
        (0x1F11C, &[0x0028, 0x004D, 0x0029]),
        (0x1F11D, &[0x0028, 0x004E, 0x0029]),
        (0x1F11E, &[0x0028, 0x004F, 0x0029]),
        (0x1F11F, &[0x0028, 0x0050, 0x0029]),
        (0x1F120, &[0x0028, 0x0051, 0x0029]),
        (0x1F121, &[0x0028, 0x0052, 0x0029]),
        (0x1F122, &[0x0028, 0x0053, 0x0029]),
        (0x1F123, &[0x0028, 0x0054, 0x0029]),
        (0x1F124, &[0x0028, 0x0055, 0x0029]),
        (0x1F125, &[0x0028, 0x0056, 0x0029]),
        (0x1F126, &[0x0028, 0x0057, 0x0029]),
        (0x1F127, &[0x0028, 0x0058, 0x0029]),
        (0x1F128, &[0x0028, 0x0059, 0x0029]),
        (0x1F129, &[0x0028, 0x005A, 0x0029]),
        (0x1F12A, &[0x3014, 0x0053, 0x3015]),
        (0x1F12B, &[0x0043]),
        (0x1F12C, &[0x0052]),
        (0x1F12D, &[0x0043, 0x0044]),
        (0x1F12E, &[0x0057, 0x005A]),
        (0x1F130, &[0x0041]),
        (0x1F131, &[0x0042]),
        (0x1F132, &[0x0043]),
        (0x1F133, &[0x0044]),
        (0x1F134, &[0x0045]),
        (0x1F135, &[0x0046]),
        (0x1F136, &[0x0047]),
        (0x1F137, &[0x0048]),
        (0x1F138, &[0x0049]),
        (0x1F139, &[0x004A]),
        (0x1F13A, &[0x004B]),
        (0x1F13B, &[0x004C]),
        (0x1F13C, &[0x004D]),
        (0x1F13D, &[0x004E]),
        (0x1F13E, &[0x004F]),
        (0x1F13F, &[0x0050]),
        (0x1F140, &[0x0051]),
        (0x1F141, &[0x0052]),
        (0x1F142, &[0x0053]),
        (0x1F143, &[0x0054]),
        (0x1F144, &[0x0055]),
        (0x1F145, &[0x0056]),
        (0x1F146, &[0x0057]),
        (0x1F147, &[0x0058]),
        (0x1F148, &[0x0059]),
        (0x1F149, &[0x005A]),
        (0x1F14A, &[0x0048, 0x0056]),
        (0x1F14B, &[0x004D, 0x0056]),
        (0x1F14C, &[0x0053, 0x0044]),
        (0x1F14D, &[0x0053, 0x0053]),
        (0x1F14E, &[0x0050, 0x0050, 0x0056]),
        (0x1F14F, &[0x0057, 0x0043]),
        (0x1F16A, &[0x004D, 0x0043]),
        (0x1F16B, &[0x004D, 0x0044]),
        (0x1F16C, &[0x004D, 0x0052]),
        (0x1F190, &[0x0044, 0x004A]),
        (0x1F200, &[0x307B, 0x304B]),
        (0x1F201, &[0x30B3, 0x30B3]),
        (0x1F202, &[0x30B5]),
        (0x1F210, &[0x624B]),
        (0x1F211, &[0x5B57]),
        (0x1F212, &[0x53CC]),
        (0x1F213, &[0x30C7]),
        (0x1F214, &[0x4E8C]),
        (0x1F215, &[0x591A]),
        (0x1F216, &[0x89E3]),
        (0x1F217, &[0x5929]),
        (0x1F218, &[0x4EA4]),
        (0x1F219, &[0x6620]),
        (0x1F21A, &[0x7121]),
        (0x1F21B, &[0x6599]),
        (0x1F21C, &[0x524D]),
        (0x1F21D, &[0x5F8C]),
        (0x1F21E, &[0x518D]),
        (0x1F21F, &[0x65B0]),
        (0x1F220, &[0x521D]),
        (0x1F221, &[0x7D42]),
        (0x1F222, &[0x751F]),
        (0x1F223, &[0x8CA9]),
        (0x1F224, &[0x58F0]),
        (0x1F225, &[0x5439]),
        (0x1F226, &[0x6F14]),
        (0x1F227, &[0x6295]),
        (0x1F228, &[0x6355]),
        (0x1F229, &[0x4E00]),
        (0x1F22A, &[0x4E09]),
        (0x1F22B, &[0x904A]),
        (0x1F22C, &[0x5DE6]),
        (0x1F22D, &[0x4E2D]),
        (0x1F22E, &[0x53F3]),
        (0x1F22F, &[0x6307]),
        (0x1F230, &[0x8D70]),
        (0x1F231, &[0x6253]),
        (0x1F232, &[0x7981]),
        (0x1F233, &[0x7A7A]),
        (0x1F234, &[0x5408]),
        (0x1F235, &[0x6E80]),
        (0x1F236, &[0x6709]),
        (0x1F237, &[0x6708]),
        (0x1F238, &[0x7533]),
        (0x1F239, &[0x5272]),
        (0x1F23A, &[0x55B6]),
        (0x1F23B, &[0x914D]),
        (0x1F240, &[0x3014, 0x672C, 0x3015]),
        (0x1F241, &[0x3014, 0x4E09, 0x3015]),
        (0x1F242, &[0x3014, 0x4E8C, 0x3015]),
        (0x1F243, &[0x3014, 0x5B89, 0x3015]),
        (0x1F244, &[0x3014, 0x70B9, 0x3015]),
        (0x1F245, &[0x3014, 0x6253, 0x3015]),
        (0x1F246, &[0x3014, 0x76D7, 0x3015]),
        (0x1F247, &[0x3014, 0x52DD, 0x3015]),
        (0x1F248, &[0x3014, 0x6557, 0x3015]),
        (0x1F250, &[0x5F97]),
        (0x1F251, &[0x53EF]),
        (0x1FBF0, &[0x0030]),
        (0x1FBF1, &[0x0031]),
        (0x1FBF2, &[0x0032]),
        (0x1FBF3, &[0x0033]),
        (0x1FBF4, &[0x0034]),
        (0x1FBF5, &[0x0035]),
        (0x1FBF6, &[0x0036]),
        (0x1FBF7, &[0x0037]),
        (0x1FBF8, &[0x0038]),
        (0x1FBF9, &[0x0039]),
    ];

    pub(crate) const CANONICAL_COMPOSITION: &[((u32, u32), u32)] = &[
        ((0x003C, 0x0338), 0x226E),
        ((0x003D, 0x0338), 0x2260),
        ((0x003E, 0x0338), 0x226F),
        ((0x0041, 0x0300), 0x00C0),
        ((0x0041, 0x0301), 0x00C1),
        ((0x0041, 0x0302), 0x00C2),
        ((0x0041, 0x0303), 0x00C3),
        ((0x0041, 0x0304), 0x0100),
        ((0x0041, 0x0306), 0x0102),
        ((0x0041, 0x0307), 0x0226),
        ((0x0041, 0x0308), 0x00C4),
        ((0x0041, 0x0309), 0x1EA2),
        ((0x0041, 0x030A), 0x00C5),
        ((0x0041, 0x030C), 0x01CD),
        ((0x0041, 0x030F), 0x0200),
        ((0x0041, 0x0311), 0x0202),
        ((0x0041, 0x0323), 0x1EA0),
        ((0x0041, 0x0325), 0x1E00),
        ((0x0041, 0x0328), 0x0104),
        ((0x0042, 0x0307), 0x1E02),
        ((0x0042, 0x0323), 0x1E04),
        ((0x0042, 0x0331), 0x1E06),
        ((0x0043, 0x0301), 0x0106),
        ((0x0043, 0x0302), 0x0108),
        ((0x0043, 0x0307), 0x010A),
        ((0x0043, 0x030C), 0x010C),
        ((0x0043, 0x0327), 0x00C7),
        ((0x0044, 0x0307), 0x1E0A),
        ((0x0044, 0x030C), 0x010E),
        ((0x0044, 0x0323), 0x1E0C),
        ((0x0044, 0x0327), 0x1E10),
        ((0x0044, 0x032D), 0x1E12),
        ((0x0044, 0x0331), 0x1E0E),
        ((0x0045, 0x0300), 0x00C8),
        ((0x0045, 0x0301), 0x00C9),
        ((0x0045, 0x0302), 0x00CA),
        ((0x0045, 0x0303), 0x1EBC),
        ((0x0045, 0x0304), 0x0112),
        ((0x0045, 0x0306), 0x0114),
        ((0x0045, 0x0307), 0x0116),
        ((0x0045, 0x0308), 0x00CB),
        ((0x0045, 0x0309), 0x1EBA),
        ((0x0045, 0x030C), 0x011A),
        ((0x0045, 0x030F), 0x0204),
        ((0x0045, 0x0311), 0x0206),
        ((0x0045, 0x0323), 0x1EB8),
        ((0x0045, 0x0327), 0x0228),
        ((0x0045, 0x0328), 0x0118),
        ((0x0045, 0x032D), 0x1E18),
        ((0x0045, 0x0330), 0x1E1A),
        ((0x0046, 0x0307), 0x1E1E),
        ((0x0047, 0x0301), 0x01F4),
        ((0x0047, 0x0302), 0x011C),
        ((0x0047, 0x0304), 0x1E20),
        ((0x0047, 0x0306), 0x011E),
        ((0x0047, 0x0307), 0x0120),
        ((0x0047, 0x030C), 0x01E6),
        ((0x0047, 0x0327), 0x0122),
        ((0x0048, 0x0302), 0x0124),
        ((0x0048, 0x0307), 0x1E22),
        ((0x0048, 0x0308), 0x1E26),
        ((0x0048, 0x030C), 0x021E),
        ((0x0048, 0x0323), 0x1E24),
        ((0x0048, 0x0327), 0x1E28),
        ((0x0048, 0x032E), 0x1E2A),
        ((0x0049, 0x0300), 0x00CC),
        ((0x0049, 0x0301), 0x00CD),
        ((0x0049, 0x0302), 0x00CE),
        ((0x0049, 0x0303), 0x0128),
        ((0x0049, 0x0304), 0x012A),
        ((0x0049, 0x0306), 0x012C),
        ((0x0049, 0x0307), 0x0130),
        ((0x0049, 0x0308), 0x00CF),
        ((0x0049, 0x0309), 0x1EC8),
        ((0x0049, 0x030C), 0x01CF),
        ((0x0049, 0x030F), 0x0208),
        ((0x0049, 0x0311), 0x020A),
        ((0x0049, 0x0323), 0x1ECA),
        ((0x0049, 0x0328), 0x012E),
        ((0x0049, 0x0330), 0x1E2C),
        ((0x004A, 0x0302), 0x0134),
        ((0x004B, 0x0301), 0x1E30),
        ((0x004B, 0x030C), 0x01E8),
        ((0x004B, 0x0323), 0x1E32),
        ((0x004B, 0x0327), 0x0136),
        ((0x004B, 0x0331), 0x1E34),
        ((0x004C, 0x0301), 0x0139),
        ((0x004C, 0x030C), 0x013D),
        ((0x004C, 0x0323), 0x1E36),
        ((0x004C, 0x0327), 0x013B),
        ((0x004C, 0x032D), 0x1E3C),
        ((0x004C, 0x0331), 0x1E3A),
        ((0x004D, 0x0301), 0x1E3E),
        ((0x004D, 0x0307), 0x1E40),
        ((0x004D, 0x0323), 0x1E42),
        ((0x004E, 0x0300), 0x01F8),
        ((0x004E, 0x0301), 0x0143),
        ((0x004E, 0x0303), 0x00D1),
        ((0x004E, 0x0307), 0x1E44),
        ((0x004E, 0x030C), 0x0147),
        ((0x004E, 0x0323), 0x1E46),
        ((0x004E, 0x0327), 0x0145),
        ((0x004E, 0x032D), 0x1E4A),
        ((0x004E, 0x0331), 0x1E48),
        ((0x004F, 0x0300), 0x00D2),
        ((0x004F, 0x0301), 0x00D3),
        ((0x004F, 0x0302), 0x00D4),
        ((0x004F, 0x0303), 0x00D5),
        ((0x004F, 0x0304), 0x014C),
        ((0x004F, 0x0306), 0x014E),
        ((0x004F, 0x0307), 0x022E),
        ((0x004F, 0x0308), 0x00D6),
        ((0x004F, 0x0309), 0x1ECE),
        ((0x004F, 0x030B), 0x0150),
        ((0x004F, 0x030C), 0x01D1),
        ((0x004F, 0x030F), 0x020C),
        ((0x004F, 0x0311), 0x020E),
        ((0x004F, 0x031B), 0x01A0),
        ((0x004F, 0x0323), 0x1ECC),
        ((0x004F, 0x0328), 0x01EA),
        ((0x0050, 0x0301), 0x1E54),
        ((0x0050, 0x0307), 0x1E56),
        ((0x0052, 0x0301), 0x0154),
        ((0x0052, 0x0307), 0x1E58),
        ((0x0052, 0x030C), 0x0158),
        ((0x0052, 0x030F), 0x0210),
        ((0x0052, 0x0311), 0x0212),
        ((0x0052, 0x0323), 0x1E5A),
        ((0x0052, 0x0327), 0x0156),
        ((0x0052, 0x0331), 0x1E5E),
        ((0x0053, 0x0301), 0x015A),
        ((0x0053, 0x0302), 0x015C),
        ((0x0053, 0x0307), 0x1E60),
        ((0x0053, 0x030C), 0x0160),
        ((0x0053, 0x0323), 0x1E62),
        ((0x0053, 0x0326), 0x0218),
        ((0x0053, 0x0327), 0x015E),
        ((0x0054, 0x0307), 0x1E6A),
        ((0x0054, 0x030C), 0x0164),
        ((0x0054, 0x0323), 0x1E6C),
        ((0x0054, 0x0326), 0x021A),
        ((0x0054, 0x0327), 0x0162),
        ((0x0054, 0x032D), 0x1E70),
        ((0x0054, 0x0331), 0x1E6E),
        ((0x0055, 0x0300), 0x00D9),
        ((0x0055, 0x0301), 0x00DA),
        ((0x0055, 0x0302), 0x00DB),
        ((0x0055, 0x0303), 0x0168),
        ((0x0055, 0x0304), 0x016A),
        ((0x0055, 0x0306), 0x016C),
        ((0x0055, 0x0308), 0x00DC),
        ((0x0055, 0x0309), 0x1EE6),
        ((0x0055, 0x030A), 0x016E),
        ((0x0055, 0x030B), 0x0170),
        ((0x0055, 0x030C), 0x01D3),
        ((0x0055, 0x030F), 0x0214),
        ((0x0055, 0x0311), 0x0216),
        ((0x0055, 0x031B), 0x01AF),
        ((0x0055, 0x0323), 0x1EE4),
        ((0x0055, 0x0324), 0x1E72),
        ((0x0055, 0x0328), 0x0172),
        ((0x0055, 0x032D), 0x1E76),
        ((0x0055, 0x0330), 0x1E74),
        ((0x0056, 0x0303), 0x1E7C),
        ((0x0056, 0x0323), 0x1E7E),
        ((0x0057, 0x0300), 0x1E80),
        ((0x0057, 0x0301), 0x1E82),
        ((0x0057, 0x0302), 0x0174),
        ((0x0057, 0x0307), 0x1E86),
        ((0x0057, 0x0308), 0x1E84),
        ((0x0057, 0x0323), 0x1E88),
        ((0x0058, 0x0307), 0x1E8A),
        ((0x0058, 0x0308), 0x1E8C),
        ((0x0059, 0x0300), 0x1EF2),
        ((0x0059, 0x0301), 0x00DD),
        ((0x0059, 0x0302), 0x0176),
        ((0x0059, 0x0303), 0x1EF8),
        ((0x0059, 0x0304), 0x0232),
        ((0x0059, 0x0307), 0x1E8E),
        ((0x0059, 0x0308), 0x0178),
        ((0x0059, 0x0309), 0x1EF6),
        ((0x0059, 0x0323), 0x1EF4),
        ((0x005A, 0x0301), 0x0179),
        ((0x005A, 0x0302), 0x1E90),
        ((0x005A, 0x0307), 0x017B),
        ((0x005A, 0x030C), 0x017D),
        ((0x005A, 0x0323), 0x1E92),
        ((0x005A, 0x0331), 0x1E94),
        ((0x0061, 0x0300), 0x00E0),
        ((0x0061, 0x0301), 0x00E1),
        ((0x0061, 0x0302), 0x00E2),
        ((0x0061, 0x0303), 0x00E3),
        ((0x0061, 0x0304), 0x0101),
        ((0x0061, 0x0306), 0x0103),
        ((0x0061, 0x0307), 0x0227),
        ((0x0061, 0x0308), 0x00E4),
        ((0x0061, 0x0309), 0x1EA3),
        ((0x0061, 0x030A), 0x00E5),
        ((0x0061, 0x030C), 0x01CE),
        ((0x0061, 0x030F), 0x0201),
        ((0x0061, 0x0311), 0x0203),
        ((0x0061, 0x0323), 0x1EA1),
        ((0x0061, 0x0325), 0x1E01),
        ((0x0061, 0x0328), 0x0105),
        ((0x0062, 0x0307), 0x1E03),
        ((0x0062, 0x0323), 0x1E05),
        ((0x0062, 0x0331), 0x1E07),
        ((0x0063, 0x0301), 0x0107),
        ((0x0063, 0x0302), 0x0109),
        ((0x0063, 0x0307), 0x010B),
        ((0x0063, 0x030C), 0x010D),
        ((0x0063, 0x0327), 0x00E7),
        ((0x0064, 0x0307), 0x1E0B),
        ((0x0064, 0x030C), 0x010F),
        ((0x0064, 0x0323), 0x1E0D),
        ((0x0064, 0x0327), 0x1E11),
        ((0x0064, 0x032D), 0x1E13),
        ((0x0064, 0x0331), 0x1E0F),
        ((0x0065, 0x0300), 0x00E8),
        ((0x0065, 0x0301), 0x00E9),
        ((0x0065, 0x0302), 0x00EA),
        ((0x0065, 0x0303), 0x1EBD),
        ((0x0065, 0x0304), 0x0113),
        ((0x0065, 0x0306), 0x0115),
        ((0x0065, 0x0307), 0x0117),
        ((0x0065, 0x0308), 0x00EB),
        ((0x0065, 0x0309), 0x1EBB),
        ((0x0065, 0x030C), 0x011B),
        ((0x0065, 0x030F), 0x0205),
        ((0x0065, 0x0311), 0x0207),
        ((0x0065, 0x0323), 0x1EB9),
        ((0x0065, 0x0327), 0x0229),
        ((0x0065, 0x0328), 0x0119),
        ((0x0065, 0x032D), 0x1E19),
        ((0x0065, 0x0330), 0x1E1B),
        ((0x0066, 0x0307), 0x1E1F),
        ((0x0067, 0x0301), 0x01F5),
        ((0x0067, 0x0302), 0x011D),
        ((0x0067, 0x0304), 0x1E21),
        ((0x0067, 0x0306), 0x011F),
        ((0x0067, 0x0307), 0x0121),
        ((0x0067, 0x030C), 0x01E7),
        ((0x0067, 0x0327), 0x0123),
        ((0x0068, 0x0302), 0x0125),
        ((0x0068, 0x0307), 0x1E23),
        ((0x0068, 0x0308), 0x1E27),
        ((0x0068, 0x030C), 0x021F),
        ((0x0068, 0x0323), 0x1E25),
        ((0x0068, 0x0327), 0x1E29),
        ((0x0068, 0x032E), 0x1E2B),
        ((0x0068, 0x0331), 0x1E96),
        ((0x0069, 0x0300), 0x00EC),
        ((0x0069, 0x0301), 0x00ED),
        ((0x0069, 0x0302), 0x00EE),
        ((0x0069, 0x0303), 0x0129),
        ((0x0069, 0x0304), 0x012B),
        ((0x0069, 0x0306), 0x012D),
        ((0x0069, 0x0308), 0x00EF),
        ((0x0069, 0x0309), 0x1EC9),
        ((0x0069, 0x030C), 0x01D0),
        ((0x0069, 0x030F), 0x0209),
        ((0x0069, 0x0311), 0x020B),
        ((0x0069, 0x0323), 0x1ECB),
        ((0x0069, 0x0328), 0x012F),
        ((0x0069, 0x0330), 0x1E2D),
        ((0x006A, 0x0302), 0x0135),
        ((0x006A, 0x030C), 0x01F0),
        ((0x006B, 0x0301), 0x1E31),
        ((0x006B, 0x030C), 0x01E9),
        ((0x006B, 0x0323), 0x1E33),
        ((0x006B, 0x0327), 0x0137),
        ((0x006B, 0x0331), 0x1E35),
        ((0x006C, 0x0301), 0x013A),
        ((0x006C, 0x030C), 0x013E),
        ((0x006C, 0x0323), 0x1E37),
        ((0x006C, 0x0327), 0x013C),
        ((0x006C, 0x032D), 0x1E3D),
        ((0x006C, 0x0331), 0x1E3B),
        ((0x006D, 0x0301), 0x1E3F),
        ((0x006D, 0x0307), 0x1E41),
        ((0x006D, 0x0323), 0x1E43),
        ((0x006E, 0x0300), 0x01F9),
        ((0x006E, 0x0301), 0x0144),
        ((0x006E, 0x0303), 0x00F1),
        ((0x006E, 0x0307), 0x1E45),
        ((0x006E, 0x030C), 0x0148),
        ((0x006E, 0x0323), 0x1E47),
        ((0x006E, 0x0327), 0x0146),
        ((0x006E, 0x032D), 0x1E4B),
        ((0x006E, 0x0331), 0x1E49),
        ((0x006F, 0x0300), 0x00F2),
        ((0x006F, 0x0301), 0x00F3),
        ((0x006F, 0x0302), 0x00F4),
        ((0x006F, 0x0303), 0x00F5),
        ((0x006F, 0x0304), 0x014D),
        ((0x006F, 0x0306), 0x014F),
        ((0x006F, 0x0307), 0x022F),
        ((0x006F, 0x0308), 0x00F6),
        ((0x006F, 0x0309), 0x1ECF),
        ((0x006F, 0x030B), 0x0151),
        ((0x006F, 0x030C), 0x01D2),
        ((0x006F, 0x030F), 0x020D),
        ((0x006F, 0x0311), 0x020F),
        ((0x006F, 0x031B), 0x01A1),
        ((0x006F, 0x0323), 0x1ECD),
        ((0x006F, 0x0328), 0x01EB),
        ((0x0070, 0x0301), 0x1E55),
        ((0x0070, 0x0307), 0x1E57),
        ((0x0072, 0x0301), 0x0155),
        ((0x0072, 0x0307), 0x1E59),
        ((0x0072, 0x030C), 0x0159),
        ((0x0072, 0x030F), 0x0211),
        ((0x0072, 0x0311), 0x0213),
        ((0x0072, 0x0323), 0x1E5B),
        ((0x0072, 0x0327), 0x0157),
        ((0x0072, 0x0331), 0x1E5F),
        ((0x0073, 0x0301), 0x015B),
        ((0x0073, 0x0302), 0x015D),
        ((0x0073, 0x0307), 0x1E61),
        ((0x0073, 0x030C), 0x0161),
        ((0x0073, 0x0323), 0x1E63),
        ((0x0073, 0x0326), 0x0219),
        ((0x0073, 0x0327), 0x015F),
        ((0x0074, 0x0307), 0x1E6B),
        ((0x0074, 0x0308), 0x1E97),
        ((0x0074, 0x030C), 0x0165),
        ((0x0074, 0x0323), 0x1E6D),
        ((0x0074, 0x0326), 0x021B),
        ((0x0074, 0x0327), 0x0163),
        ((0x0074, 0x032D), 0x1E71),
        ((0x0074, 0x0331), 0x1E6F),
        ((0x0075, 0x0300), 0x00F9),
        ((0x0075, 0x0301), 0x00FA),
        ((0x0075, 0x0302), 0x00FB),
        ((0x0075, 0x0303), 0x0169),
        ((0x0075, 0x0304), 0x016B),
        ((0x0075, 0x0306), 0x016D),
        ((0x0075, 0x0308), 0x00FC),
        ((0x0075, 0x0309), 0x1EE7),
        ((0x0075, 0x030A), 0x016F),
        ((0x0075, 0x030B), 0x0171),
        ((0x0075, 0x030C), 0x01D4),
        ((0x0075, 0x030F), 0x0215),
        ((0x0075, 0x0311), 0x0217),
        ((0x0075, 0x031B), 0x01B0),
        ((0x0075, 0x0323), 0x1EE5),
        ((0x0075, 0x0324), 0x1E73),
        ((0x0075, 0x0328), 0x0173),
        ((0x0075, 0x032D), 0x1E77),
        ((0x0075, 0x0330), 0x1E75),
        ((0x0076, 0x0303), 0x1E7D),
        ((0x0076, 0x0323), 0x1E7F),
        ((0x0077, 0x0300), 0x1E81),
        ((0x0077, 0x0301), 0x1E83),
        ((0x0077, 0x0302), 0x0175),
        ((0x0077, 0x0307), 0x1E87),
        ((0x0077, 0x0308), 0x1E85),
        ((0x0077, 0x030A), 0x1E98),
        ((0x0077, 0x0323), 0x1E89),
        ((0x0078, 0x0307), 0x1E8B),
        ((0x0078, 0x0308), 0x1E8D),
        ((0x0079, 0x0300), 0x1EF3),
        ((0x0079, 0x0301), 0x00FD),
        ((0x0079, 0x0302), 0x0177),
        ((0x0079, 0x0303), 0x1EF9),
        ((0x0079, 0x0304), 0x0233),
        ((0x0079, 0x0307), 0x1E8F),
        ((0x0079, 0x0308), 0x00FF),
        ((0x0079, 0x0309), 0x1EF7),
        ((0x0079, 0x030A), 0x1E99),
        ((0x0079, 0x0323), 0x1EF5),
        ((0x007A, 0x0301), 0x017A),
        ((0x007A, 0x0302), 0x1E91),
        ((0x007A, 0x0307), 0x017C),
        ((0x007A, 0x030C), 0x017E),
        ((0x007A, 0x0323), 0x1E93),
        ((0x007A, 0x0331), 0x1E95),
        ((0x00A8, 0x0300), 0x1FED),
        ((0x00A8, 0x0301), 0x0385),
        ((0x00A8, 0x0342), 0x1FC1),
        ((0x00C2, 0x0300), 0x1EA6),
        ((0x00C2, 0x0301), 0x1EA4),
        ((0x00C2, 0x0303), 0x1EAA),
        ((0x00C2, 0x0309), 0x1EA8),
        ((0x00C4, 0x0304), 0x01DE),
        ((0x00C5, 0x0301), 0x01FA),
        ((0x00C6, 0x0301), 0x01FC),
        ((0x00C6, 0x0304), 0x01E2),
        ((0x00C7, 0x0301), 0x1E08),
        ((0x00CA, 0x0300), 0x1EC0),
        ((0x00CA, 0x0301), 0x1EBE),
        ((0x00CA, 0x0303), 0x1EC4),
        ((0x00CA, 0x0309), 0x1EC2),
        ((0x00CF, 0x0301), 0x1E2E),
        ((0x00D4, 0x0300), 0x1ED2),
        ((0x00D4, 0x0301), 0x1ED0),
        ((0x00D4, 0x0303), 0x1ED6),
        ((0x00D4, 0x0309), 0x1ED4),
        ((0x00D5, 0x0301), 0x1E4C),
        ((0x00D5, 0x0304), 0x022C),
        ((0x00D5, 0x0308), 0x1E4E),
        ((0x00D6, 0x0304), 0x022A),
        ((0x00D8, 0x0301), 0x01FE),
        ((0x00DC, 0x0300), 0x01DB),
        ((0x00DC, 0x0301), 0x01D7),
        ((0x00DC, 0x0304), 0x01D5),
        ((0x00DC, 0x030C), 0x01D9),
        ((0x00E2, 0x0300), 0x1EA7),
        ((0x00E2, 0x0301), 0x1EA5),
        ((0x00E2, 0x0303), 0x1EAB),
        ((0x00E2, 0x0309), 0x1EA9),
        ((0x00E4, 0x0304), 0x01DF),
        ((0x00E5, 0x0301), 0x01FB),
        ((0x00E6, 0x0301), 0x01FD),
        ((0x00E6, 0x0304), 0x01E3),
        ((0x00E7, 0x0301), 0x1E09),
        ((0x00EA, 0x0300), 0x1EC1),
        ((0x00EA, 0x0301), 0x1EBF),
        ((0x00EA, 0x0303), 0x1EC5),
        ((0x00EA, 0x0309), 0x1EC3),
        ((0x00EF, 0x0301), 0x1E2F),
        ((0x00F4, 0x0300), 0x1ED3),
        ((0x00F4, 0x0301), 0x1ED1),
        ((0x00F4, 0x0303), 0x1ED7),
        ((0x00F4, 0x0309), 0x1ED5),
        ((0x00F5, 0x0301), 0x1E4D),
        ((0x00F5, 0x0304), 0x022D),
        ((0x00F5, 0x0308), 0x1E4F),
        ((0x00F6, 0x0304), 0x022B),
        ((0x00F8, 0x0301), 0x01FF),
        ((0x00FC, 0x0300), 0x01DC),
        ((0x00FC, 0x0301), 0x01D8),
        ((0x00FC, 0x0304), 0x01D6),
        ((0x00FC, 0x030C), 0x01DA),
        ((0x0102, 0x0300), 0x1EB0),
        ((0x0102, 0x0301), 0x1EAE),
        ((0x0102, 0x0303), 0x1EB4),
        ((0x0102, 0x0309), 0x1EB2),
        ((0x0103, 0x0300), 0x1EB1),
        ((0x0103, 0x0301), 0x1EAF),
        ((0x0103, 0x0303), 0x1EB5),
        ((0x0103, 0x0309), 0x1EB3),
        ((0x0112, 0x0300), 0x1E14),
        ((0x0112, 0x0301), 0x1E16),
        ((0x0113, 0x0300), 0x1E15),
        ((0x0113, 0x0301), 0x1E17),
        ((0x014C, 0x0300), 0x1E50),
        ((0x014C, 0x0301), 0x1E52),
        ((0x014D, 0x0300), 0x1E51),
        ((0x014D, 0x0301), 0x1E53),
        ((0x015A, 0x0307), 0x1E64),
        ((0x015B, 0x0307), 0x1E65),
        ((0x0160, 0x0307), 0x1E66),
        ((0x0161, 0x0307), 0x1E67),
        ((0x0168, 0x0301), 0x1E78),
        ((0x0169, 0x0301), 0x1E79),
        ((0x016A, 0x0308), 0x1E7A),
        ((0x016B, 0x0308), 0x1E7B),
        ((0x017F, 0x0307), 0x1E9B),
        ((0x01A0, 0x0300), 0x1EDC),
        ((0x01A0, 0x0301), 0x1EDA),
        ((0x01A0, 0x0303), 0x1EE0),
        ((0x01A0, 0x0309), 0x1EDE),
        ((0x01A0, 0x0323), 0x1EE2),
        ((0x01A1, 0x0300), 0x1EDD),
        ((0x01A1, 0x0301), 0x1EDB),
        ((0x01A1, 0x0303), 0x1EE1),
        ((0x01A1, 0x0309), 0x1EDF),
        ((0x01A1, 0x0323), 0x1EE3),
        ((0x01AF, 0x0300), 0x1EEA),
        ((0x01AF, 0x0301), 0x1EE8),
        ((0x01AF, 0x0303), 0x1EEE),
        ((0x01AF, 0x0309), 0x1EEC),
        ((0x01AF, 0x0323), 0x1EF0),
        ((0x01B0, 0x0300), 0x1EEB),
        ((0x01B0, 0x0301), 0x1EE9),
        ((0x01B0, 0x0303), 0x1EEF),
        ((0x01B0, 0x0309), 0x1EED),
        ((0x01B0, 0x0323), 0x1EF1),
        ((0x01B7, 0x030C), 0x01EE),
        ((0x01EA, 0x0304), 0x01EC),
        ((0x01EB, 0x0304), 0x01ED),
        ((0x0226, 0x0304), 0x01E0),
        ((0x0227, 0x0304), 0x01E1),
        ((0x0228, 0x0306), 0x1E1C),
        ((0x0229, 0x0306), 0x1E1D),
        ((0x022E, 0x0304), 0x0230),
        ((0x022F, 0x0304), 0x0231),
        ((0x0292, 0x030C), 0x01EF),
        ((0x0391, 0x0300), 0x1FBA),
        ((0x0391, 0x0301), 0x0386),
        ((0x0391, 0x0304), 0x1FB9),
        ((0x0391, 0x0306), 0x1FB8),
        ((0x0391, 0x0313), 0x1F08),
        ((0x0391, 0x0314), 0x1F09),
        ((0x0391, 0x0345), 0x1FBC),
        ((0x0395, 0x0300), 0x1FC8),
        ((0x0395, 0x0301), 0x0388),
        ((0x0395, 0x0313), 0x1F18),
        ((0x0395, 0x0314), 0x1F19),
        ((0x0397, 0x0300), 0x1FCA),
        ((0x0397, 0x0301), 0x0389),
        ((0x0397, 0x0313), 0x1F28),
        ((0x0397, 0x0314), 0x1F29),
        ((0x0397, 0x0345), 0x1FCC),
        ((0x0399, 0x0300), 0x1FDA),
        ((0x0399, 0x0301), 0x038A),
        ((0x0399, 0x0304), 0x1FD9),
        ((0x0399, 0x0306), 0x1FD8),
        ((0x0399, 0x0308), 0x03AA),
        ((0x0399, 0x0313), 0x1F38),
        ((0x0399, 0x0314), 0x1F39),
        ((0x039F, 0x0300), 0x1FF8),
        ((0x039F, 0x0301), 0x038C),
        ((0x039F, 0x0313), 0x1F48),
        ((0x039F, 0x0314), 0x1F49),
        ((0x03A1, 0x0314), 0x1FEC),
        ((0x03A5, 0x0300), 0x1FEA),
        ((0x03A5, 0x0301), 0x038E),
        ((0x03A5, 0x0304), 0x1FE9),
        ((0x03A5, 0x0306), 0x1FE8),
        ((0x03A5, 0x0308), 0x03AB),
        ((0x03A5, 0x0314), 0x1F59),
        ((0x03A9, 0x0300), 0x1FFA),
        ((0x03A9, 0x0301), 0x038F),
        ((0x03A9, 0x0313), 0x1F68),
        ((0x03A9, 0x0314), 0x1F69),
        ((0x03A9, 0x0345), 0x1FFC),
        ((0x03AC, 0x0345), 0x1FB4),
        ((0x03AE, 0x0345), 0x1FC4),
        ((0x03B1, 0x0300), 0x1F70),
        ((0x03B1, 0x0301), 0x03AC),
        ((0x03B1, 0x0304), 0x1FB1),
        ((0x03B1, 0x0306), 0x1FB0),
        ((0x03B1, 0x0313), 0x1F00),
        ((0x03B1, 0x0314), 0x1F01),
        ((0x03B1, 0x0342), 0x1FB6),
        ((0x03B1, 0x0345), 0x1FB3),
        ((0x03B5, 0x0300), 0x1F72),
        ((0x03B5, 0x0301), 0x03AD),
        ((0x03B5, 0x0313), 0x1F10),
        ((0x03B5, 0x0314), 0x1F11),
        ((0x03B7, 0x0300), 0x1F74),
        ((0x03B7, 0x0301), 0x03AE),
        ((0x03B7, 0x0313), 0x1F20),
        ((0x03B7, 0x0314), 0x1F21),
        ((0x03B7, 0x0342), 0x1FC6),
        ((0x03B7, 0x0345), 0x1FC3),
        ((0x03B9, 0x0300), 0x1F76),
        ((0x03B9, 0x0301), 0x03AF),
        ((0x03B9, 0x0304), 0x1FD1),
        ((0x03B9, 0x0306), 0x1FD0),
        ((0x03B9, 0x0308), 0x03CA),
        ((0x03B9, 0x0313), 0x1F30),
        ((0x03B9, 0x0314), 0x1F31),
        ((0x03B9, 0x0342), 0x1FD6),
        ((0x03BF, 0x0300), 0x1F78),
        ((0x03BF, 0x0301), 0x03CC),
        ((0x03BF, 0x0313), 0x1F40),
        ((0x03BF, 0x0314), 0x1F41),
        ((0x03C1, 0x0313), 0x1FE4),
        ((0x03C1, 0x0314), 0x1FE5),
        ((0x03C5, 0x0300), 0x1F7A),
        ((0x03C5, 0x0301), 0x03CD),
        ((0x03C5, 0x0304), 0x1FE1),
        ((0x03C5, 0x0306), 0x1FE0),
        ((0x03C5, 0x0308), 0x03CB),
        ((0x03C5, 0x0313), 0x1F50),
        ((0x03C5, 0x0314), 0x1F51),
        ((0x03C5, 0x0342), 0x1FE6),
        ((0x03C9, 0x0300), 0x1F7C),
        ((0x03C9, 0x0301), 0x03CE),
        ((0x03C9, 0x0313), 0x1F60),
        ((0x03C9, 0x0314), 0x1F61),
        ((0x03C9, 0x0342), 0x1FF6),
        ((0x03C9, 0x0345), 0x1FF3),
        ((0x03CA, 0x0300), 0x1FD2),
        ((0x03CA, 0x0301), 0x0390),
        ((0x03CA, 0x0342), 0x1FD7),
        ((0x03CB, 0x0300), 0x1FE2),
        ((0x03CB, 0x0301), 0x03B0),
        ((0x03CB, 0x0342), 0x1FE7),
        ((0x03CE, 0x0345), 0x1FF4),
        ((0x03D2, 0x0301), 0x03D3),
        ((0x03D2, 0x0308), 0x03D4),
        ((0x0406, 0x0308), 0x0407),
        ((0x0410, 0x0306), 0x04D0),
        ((0x0410, 0x0308), 0x04D2),
        ((0x0413, 0x0301), 0x0403),
        ((0x0415, 0x0300), 0x0400),
        ((0x0415, 0x0306), 0x04D6),
        ((0x0415, 0x0308), 0x0401),
        ((0x0416, 0x0306), 0x04C1),
        ((0x0416, 0x0308), 0x04DC),
        ((0x0417, 0x0308), 0x04DE),
        ((0x0418, 0x0300), 0x040D),
        ((0x0418, 0x0304), 0x04E2),
        ((0x0418, 0x0306), 0x0419),
        ((0x0418, 0x0308), 0x04E4),
        ((0x041A, 0x0301), 0x040C),
        ((0x041E, 0x0308), 0x04E6),
        ((0x0423, 0x0304), 0x04EE),
        ((0x0423, 0x0306), 0x040E),
        ((0x0423, 0x0308), 0x04F0),
        ((0x0423, 0x030B), 0x04F2),
        ((0x0427, 0x0308), 0x04F4),
        ((0x042B, 0x0308), 0x04F8),
        ((0x042D, 0x0308), 0x04EC),
        ((0x0430, 0x0306), 0x04D1),
        ((0x0430, 0x0308), 0x04D3),
        ((0x0433, 0x0301), 0x0453),
        ((0x0435, 0x0300), 0x0450),
        ((0x0435, 0x0306), 0x04D7),
        ((0x0435, 0x0308), 0x0451),
        ((0x0436, 0x0306), 0x04C2),
        ((0x0436, 0x0308), 0x04DD),
        ((0x0437, 0x0308), 0x04DF),
        ((0x0438, 0x0300), 0x045D),
        ((0x0438, 0x0304), 0x04E3),
        ((0x0438, 0x0306), 0x0439),
        ((0x0438, 0x0308), 0x04E5),
        ((0x043A, 0x0301), 0x045C),
        ((0x043E, 0x0308), 0x04E7),
        ((0x0443, 0x0304), 0x04EF),
        ((0x0443, 0x0306), 0x045E),
        ((0x0443, 0x0308), 0x04F1),
        ((0x0443, 0x030B), 0x04F3),
        ((0x0447, 0x0308), 0x04F5),
        ((0x044B, 0x0308), 0x04F9),
        ((0x044D, 0x0308), 0x04ED),
        ((0x0456, 0x0308), 0x0457),
        ((0x0474, 0x030F), 0x0476),
        ((0x0475, 0x030F), 0x0477),
        ((0x04D8, 0x0308), 0x04DA),
        ((0x04D9, 0x0308), 0x04DB),
        ((0x04E8, 0x0308), 0x04EA),
        ((0x04E9, 0x0308), 0x04EB),
        ((0x0627, 0x0653), 0x0622),
        ((0x0627, 0x0654), 0x0623),
        ((0x0627, 0x0655), 0x0625),
        ((0x0648, 0x0654), 0x0624),
        ((0x064A, 0x0654), 0x0626),
        ((0x06C1, 0x0654), 0x06C2),
        ((0x06D2, 0x0654), 0x06D3),
        ((0x06D5, 0x0654), 0x06C0),
        ((0x0928, 0x093C), 0x0929),
        ((0x0930, 0x093C), 0x0931),
        ((0x0933, 0x093C), 0x0934),
        ((0x09C7, 0x09BE), 0x09CB),
        ((0x09C7, 0x09D7), 0x09CC),
        ((0x0B47, 0x0B3E), 0x0B4B),
        ((0x0B47, 0x0B56), 0x0B48),
        ((0x0B47, 0x0B57), 0x0B4C),
        ((0x0B92, 0x0BD7), 0x0B94),
        ((0x0BC6, 0x0BBE), 0x0BCA),
        ((0x0BC6, 0x0BD7), 0x0BCC),
        ((0x0BC7, 0x0BBE), 0x0BCB),
        ((0x0C46, 0x0C56), 0x0C48),
        ((0x0CBF, 0x0CD5), 0x0CC0),
        ((0x0CC6, 0x0CC2), 0x0CCA),
        ((0x0CC6, 0x0CD5), 0x0CC7),
        ((0x0CC6, 0x0CD6), 0x0CC8),
        ((0x0CCA, 0x0CD5), 0x0CCB),
        ((0x0D46, 0x0D3E), 0x0D4A),
        ((0x0D46, 0x0D57), 0x0D4C),
        ((0x0D47, 0x0D3E), 0x0D4B),
        ((0x0DD9, 0x0DCA), 0x0DDA),
        ((0x0DD9, 0x0DCF), 0x0DDC),
        ((0x0DD9, 0x0DDF), 0x0DDE),
        ((0x0DDC, 0x0DCA), 0x0DDD),
        ((0x1025, 0x102E), 0x1026),
        ((0x1B05, 0x1B35), 0x1B06),
        ((0x1B07, 0x1B35), 0x1B08),
        ((0x1B09, 0x1B35), 0x1B0A),
        ((0x1B0B, 0x1B35), 0x1B0C),
        ((0x1B0D, 0x1B35), 0x1B0E),
        ((0x1B11, 0x1B35), 0x1B12),
        ((0x1B3A, 0x1B35), 0x1B3B),
        ((0x1B3C, 0x1B35), 0x1B3D),
        ((0x1B3E, 0x1B35), 0x1B40),
        ((0x1B3F, 0x1B35), 0x1B41),
        ((0x1B42, 0x1B35), 0x1B43),
        ((0x1E36, 0x0304), 0x1E38),
        ((0x1E37, 0x0304), 0x1E39),
        ((0x1E5A, 0x0304), 0x1E5C),
        ((0x1E5B, 0x0304), 0x1E5D),
        ((0x1E62, 0x0307), 0x1E68),
        ((0x1E63, 0x0307), 0x1E69),
        ((0x1EA0, 0x0302), 0x1EAC),
        ((0x1EA0, 0x0306), 0x1EB6),
        ((0x1EA1, 0x0302), 0x1EAD),
        ((0x1EA1, 0x0306), 0x1EB7),
        ((0x1EB8, 0x0302), 0x1EC6),
        ((0x1EB9, 0x0302), 0x1EC7),
        ((0x1ECC, 0x0302), 0x1ED8),
        ((0x1ECD, 0x0302), 0x1ED9),
        ((0x1F00, 0x0300), 0x1F02),
        ((0x1F00, 0x0301), 0x1F04),
        ((0x1F00, 0x0342), 0x1F06),
        ((0x1F00, 0x0345), 0x1F80),
        ((0x1F01, 0x0300), 0x1F03),
        ((0x1F01, 0x0301), 0x1F05),
        ((0x1F01, 0x0342), 0x1F07),
        ((0x1F01, 0x0345), 0x1F81),
        ((0x1F02, 0x0345), 0x1F82),
        ((0x1F03, 0x0345), 0x1F83),
        ((0x1F04, 0x0345), 0x1F84),
        ((0x1F05, 0x0345), 0x1F85),
        ((0x1F06, 0x0345), 0x1F86),
        ((0x1F07, 0x0345), 0x1F87),
        ((0x1F08, 0x0300), 0x1F0A),
        ((0x1F08, 0x0301), 0x1F0C),
        ((0x1F08, 0x0342), 0x1F0E),
        ((0x1F08, 0x0345), 0x1F88),
        ((0x1F09, 0x0300), 0x1F0B),
        ((0x1F09, 0x0301), 0x1F0D),
        ((0x1F09, 0x0342), 0x1F0F),
        ((0x1F09, 0x0345), 0x1F89),
        ((0x1F0A, 0x0345), 0x1F8A),
        ((0x1F0B, 0x0345), 0x1F8B),
        ((0x1F0C, 0x0345), 0x1F8C),
        ((0x1F0D, 0x0345), 0x1F8D),
        ((0x1F0E, 0x0345), 0x1F8E),
        ((0x1F0F, 0x0345), 0x1F8F),
        ((0x1F10, 0x0300), 0x1F12),
        ((0x1F10, 0x0301), 0x1F14),
        ((0x1F11, 0x0300), 0x1F13),
        ((0x1F11, 0x0301), 0x1F15),
        ((0x1F18, 0x0300), 0x1F1A),
        ((0x1F18, 0x0301), 0x1F1C),
        ((0x1F19, 0x0300), 0x1F1B),
        ((0x1F19, 0x0301), 0x1F1D),
        ((0x1F20, 0x0300), 0x1F22),
        ((0x1F20, 0x0301), 0x1F24),
        ((0x1F20, 0x0342), 0x1F26),
        ((0x1F20, 0x0345), 0x1F90),
        ((0x1F21, 0x0300), 0x1F23),
        ((0x1F21, 0x0301), 0x1F25),
        ((0x1F21, 0x0342), 0x1F27),
        ((0x1F21, 0x0345), 0x1F91),
        ((0x1F22, 0x0345), 0x1F92),
        ((0x1F23, 0x0345), 0x1F93),
        ((0x1F24, 0x0345), 0x1F94),
        ((0x1F25, 0x0345), 0x1F95),
        ((0x1F26, 0x0345), 0x1F96),
        ((0x1F27, 0x0345), 0x1F97),
        ((0x1F28, 0x0300), 0x1F2A),
        ((0x1F28, 0x0301), 0x1F2C),
        ((0x1F28, 0x0342), 0x1F2E),
        ((0x1F28, 0x0345), 0x1F98),
        ((0x1F29, 0x0300), 0x1F2B),
        ((0x1F29, 0x0301), 0x1F2D),
        ((0x1F29, 0x0342), 0x1F2F),
        ((0x1F29, 0x0345), 0x1F99),
        ((0x1F2A, 0x0345), 0x1F9A),
        ((0x1F2B, 0x0345), 0x1F9B),
        ((0x1F2C, 0x0345), 0x1F9C),
        ((0x1F2D, 0x0345), 0x1F9D),
        ((0x1F2E, 0x0345), 0x1F9E),
        ((0x1F2F, 0x0345), 0x1F9F),
        ((0x1F30, 0x0300), 0x1F32),
        ((0x1F30, 0x0301), 0x1F34),
        ((0x1F30, 0x0342), 0x1F36),
        ((0x1F31, 0x0300), 0x1F33),
        ((0x1F31, 0x0301), 0x1F35),
        ((0x1F31, 0x0342), 0x1F37),
        ((0x1F38, 0x0300), 0x1F3A),
        ((0x1F38, 0x0301), 0x1F3C),
        ((0x1F38, 0x0342), 0x1F3E),
        ((0x1F39, 0x0300), 0x1F3B),
        ((0x1F39, 0x0301), 0x1F3D),
        ((0x1F39, 0x0342), 0x1F3F),
        ((0x1F40, 0x0300), 0x1F42),
        ((0x1F40, 0x0301), 0x1F44),
        ((0x1F41, 0x0300), 0x1F43),
        ((0x1F41, 0x0301), 0x1F45),
        ((0x1F48, 0x0300), 0x1F4A),
        ((0x1F48, 0x0301), 0x1F4C),
        ((0x1F49, 0x0300), 0x1F4B),
        ((0x1F49, 0x0301), 0x1F4D),
        ((0x1F50, 0x0300), 0x1F52),
        ((0x1F50, 0x0301), 0x1F54),
        ((0x1F50, 0x0342), 0x1F56),
        ((0x1F51, 0x0300), 0x1F53),
        ((0x1F51, 0x0301), 0x1F55),
        ((0x1F51, 0x0342), 0x1F57),
        ((0x1F59, 0x0300), 0x1F5B),
        ((0x1F59, 0x0301), 0x1F5D),
        ((0x1F59, 0x0342), 0x1F5F),
        ((0x1F60, 0x0300), 0x1F62),
        ((0x1F60, 0x0301), 0x1F64),
        ((0x1F60, 0x0342), 0x1F66),
        ((0x1F60, 0x0345), 0x1FA0),
        ((0x1F61, 0x0300), 0x1F63),
        ((0x1F61, 0x0301), 0x1F65),
        ((0x1F61, 0x0342), 0x1F67),
        ((0x1F61, 0x0345), 0x1FA1),
        ((0x1F62, 0x0345), 0x1FA2),
        ((0x1F63, 0x0345), 0x1FA3),
        ((0x1F64, 0x0345), 0x1FA4),
        ((0x1F65, 0x0345), 0x1FA5),
        ((0x1F66, 0x0345), 0x1FA6),
        ((0x1F67, 0x0345), 0x1FA7),
        ((0x1F68, 0x0300), 0x1F6A),
        ((0x1F68, 0x0301), 0x1F6C),
        ((0x1F68, 0x0342), 0x1F6E),
        ((0x1F68, 0x0345), 0x1FA8),
        ((0x1F69, 0x0300), 0x1F6B),
        ((0x1F69, 0x0301), 0x1F6D),
        ((0x1F69, 0x0342), 0x1F6F),
        ((0x1F69, 0x0345), 0x1FA9),
        ((0x1F6A, 0x0345), 0x1FAA),
        ((0x1F6B, 0x0345), 0x1FAB),
        ((0x1F6C, 0x0345), 0x1FAC),
        ((0x1F6D, 0x0345), 0x1FAD),
        ((0x1F6E, 0x0345), 0x1FAE),
        ((0x1F6F, 0x0345), 0x1FAF),
        ((0x1F70, 0x0345), 0x1FB2),
        ((0x1F74, 0x0345), 0x1FC2),
        ((0x1F7C, 0x0345), 0x1FF2),
        ((0x1FB6, 0x0345), 0x1FB7),
        ((0x1FBF, 0x0300), 0x1FCD),
        ((0x1FBF, 0x0301), 0x1FCE),
        ((0x1FBF, 0x0342), 0x1FCF),
        ((0x1FC6, 0x0345), 0x1FC7),
        ((0x1FF6, 0x0345), 0x1FF7),
        ((0x1FFE, 0x0300), 0x1FDD),
        ((0x1FFE, 0x0301), 0x1FDE),
        ((0x1FFE, 0x0342), 0x1FDF),
        ((0x2190, 0x0338), 0x219A),
        ((0x2192, 0x0338), 0x219B),
        ((0x2194, 0x0338), 0x21AE),
        ((0x21D0, 0x0338), 0x21CD),
        ((0x21D2, 0x0338), 0x21CF),
        ((0x21D4, 0x0338), 0x21CE),
        ((0x2203, 0x0338), 0x2204),
        ((0x2208, 0x0338), 0x2209),
        ((0x220B, 0x0338), 0x220C),
        ((0x2223, 0x0338), 0x2224),
        ((0x2225, 0x0338), 0x2226),
        ((0x223C, 0x0338), 0x2241),
        ((0x2243, 0x0338), 0x2244),
        ((0x2245, 0x0338), 0x2247),
        ((0x2248, 0x0338), 0x2249),
        ((0x224D, 0x0338), 0x226D),
        ((0x2261, 0x0338), 0x2262),
        ((0x2264, 0x0338), 0x2270),
        ((0x2265, 0x0338), 0x2271),
        ((0x2272, 0x0338), 0x2274),
        ((0x2273, 0x0338), 0x2275),
        ((0x2276, 0x0338), 0x2278),
        ((0x2277, 0x0338), 0x2279),
        ((0x227A, 0x0338), 0x2280),
        ((0x227B, 0x0338), 0x2281),
        ((0x227C, 0x0338), 0x22E0),
        ((0x227D, 0x0338), 0x22E1),
        ((0x2282, 0x0338), 0x2284),
        ((0x2283, 0x0338), 0x2285),
        ((0x2286, 0x0338), 0x2288),
        ((0x2287, 0x0338), 0x2289),
        ((0x2291, 0x0338), 0x22E2),
        ((0x2292, 0x0338), 0x22E3),
        ((0x22A2, 0x0338), 0x22AC),
        ((0x22A8, 0x0338), 0x22AD),
        ((0x22A9, 0x0338), 0x22AE),
        ((0x22AB, 0x0338), 0x22AF),
        ((0x22B2, 0x0338), 0x22EA),
        ((0x22B3, 0x0338), 0x22EB),
        ((0x22B4, 0x0338), 0x22EC),
        ((0x22B5, 0x0338), 0x22ED),
        ((0x3046, 0x3099), 0x3094),
        ((0x304B, 0x3099), 0x304C),
        ((0x304D, 0x3099), 0x304E),
        ((0x304F, 0x3099), 0x3050),
        ((0x3051, 0x3099), 0x3052),
        ((0x3053, 0x3099), 0x3054),
        ((0x3055, 0x3099), 0x3056),
        ((0x3057, 0x3099), 0x3058),
        ((0x3059, 0x3099), 0x305A),
        ((0x305B, 0x3099), 0x305C),
        ((0x305D, 0x3099), 0x305E),
        ((0x305F, 0x3099), 0x3060),
        ((0x3061, 0x3099), 0x3062),
        ((0x3064, 0x3099), 0x3065),
        ((0x3066, 0x3099), 0x3067),
        ((0x3068, 0x3099), 0x3069),
        ((0x306F, 0x3099), 0x3070),
        ((0x306F, 0x309A), 0x3071),
        ((0x3072, 0x3099), 0x3073),
        ((0x3072, 0x309A), 0x3074),
        ((0x3075, 0x3099), 0x3076),
        ((0x3075, 0x309A), 0x3077),
        ((0x3078, 0x3099), 0x3079),
        ((0x3078, 0x309A), 0x307A),
        ((0x307B, 0x3099), 0x307C),
        ((0x307B, 0x309A), 0x307D),
        ((0x309D, 0x3099), 0x309E),
        ((0x30A6, 0x3099), 0x30F4),
        ((0x30AB, 0x3099), 0x30AC),
        ((0x30AD, 0x3099), 0x30AE),
        ((0x30AF, 0x3099), 0x30B0),
        ((0x30B1, 0x3099), 0x30B2),
        ((0x30B3, 0x3099), 0x30B4),
        ((0x30B5, 0x3099), 0x30B6),
        ((0x30B7, 0x3099), 0x30B8),
        ((0x30B9, 0x3099), 0x30BA),
        ((0x30BB, 0x3099), 0x30BC),
        ((0x30BD, 0x3099), 0x30BE),
        ((0x30BF, 0x3099), 0x30C0),
        ((0x30C1, 0x3099), 0x30C2),
        ((0x30C4, 0x3099), 0x30C5),
        ((0x30C6, 0x3099), 0x30C7),
        ((0x30C8, 0x3099), 0x30C9),
        ((0x30CF, 0x3099), 0x30D0),
        ((0x30CF, 0x309A), 0x30D1),
        ((0x30D2, 0x3099), 0x30D3),
        ((0x30D2, 0x309A), 0x30D4),
        ((0x30D5, 0x3099), 0x30D6),
        ((0x30D5, 0x309A), 0x30D7),
        ((0x30D8, 0x3099), 0x30D9),
        ((0x30D8, 0x309A), 0x30DA),
        ((0x30DB, 0x3099), 0x30DC),
        ((0x30DB, 0x309A), 0x30DD),
        ((0x30EF, 0x3099), 0x30F7),
        ((0x30F0, 0x3099), 0x30F8),
        ((0x30F1, 0x3099), 0x30F9),
        ((0x30F2, 0x3099), 0x30FA),
        ((0x30FD, 0x3099), 0x30FE),
        ((0x11099, 0x110BA), 0x1109A),
        ((0x1109B, 0x110BA), 0x1109C),
        ((0x110A5, 0x110BA), 0x110AB),
        ((0x11131, 0x11127), 0x1112E),
        ((0x11132, 0x11127), 0x1112F),
        ((0x11347, 0x1133E), 0x1134B),
        ((0x11347, 0x11357), 0x1134C),
        ((0x114B9, 0x114B0), 0x114BC),
        ((0x114B9, 0x114BA), 0x114BB),
        ((0x114B9, 0x114BD), 0x114BE),
        ((0x115B8, 0x115AF), 0x115BA),
        ((0x115B9, 0x115AF), 0x115BB),
        ((0x11935, 0x11930), 0x11938),
    ];

    pub(crate) const COMBINES_BACKWARD: &[u32] = &[
        0x0300,
        0x0301,
        0x0302,
        0x0303,
        0x0304,
        0x0306,
        0x0307,
        0x0308,
        0x0309,
        0x030A,
        0x030B,
        0x030C,
        0x030F,
        0x0311,
        0x0313,
        0x0314,
        0x031B,
        0x0323,
        0x0324,
        0x0325,
        0x0326,
        0x0327,
        0x0328,
        0x032D,
        0x032E,
        0x0330,
        0x0331,
        0x0338,
        0x0342,
        0x0345,
        0x0653,
        0x0654,
        0x0655,
        0x093C,
        0x09BE,
        0x09D7,
        0x0B3E,
        0x0B56,
        0x0B57,
        0x0BBE,
        0x0BD7,
        0x0C56,
        0x0CC2,
        0x0CD5,
        0x0CD6,
        0x0D3E,
        0x0D57,
        0x0DCA,
        0x0DCF,
        0x0DDF,
        0x102E,
        0x1B35,
        0x3099,
        0x309A,
        0x110BA,
        0x11127,
        0x1133E,
        0x11357,
        0x114B0,
        0x114BA,
        0x114BD,
        0x115AF,
        0x11930,
    ];
}

pub(crate) mod case_folding {
    pub(crate) const COMMON_FOLDING: &[(u32, u32)] = &[
        (0x0041, 0x0061),
        (0x0042, 0x0062),
        (0x0043, 0x0063),
        (0x0044, 0x0064),
        (0x0045, 0x0065),
        (0x0046, 0x0066),
        (0x0047, 0x0067),
        (0x0048, 0x0068),
        (0x0049, 0x0069),
        (0x004A, 0x006A),
        (0x004B, 0x006B),
        (0x004C, 0x006C),
        (0x004D, 0x006D),
        (0x004E, 0x006E),
        (0x004F, 0x006F),
        (0x0050, 0x0070),
        (0x0051, 0x0071),
        (0x0052, 0x0072),
        (0x0053, 0x0073),
        (0x0054, 0x0074),
        (0x0055, 0x0075),
        (0x0056, 0x0076),
        (0x0057, 0x0077),
        (0x0058, 0x0078),
        (0x0059, 0x0079),
        (0x005A, 0x007A),
        (0x00B5, 0x03BC),
        (0x00C0, 0x00E0),
        (0x00C1, 0x00E1),
        (0x00C2, 0x00E2),
        (0x00C3, 0x00E3),
        (0x00C4, 0x00E4),
        (0x00C5, 0x00E5),
        (0x00C6, 0x00E6),
        (0x00C7, 0x00E7),
        (0x00C8, 0x00E8),
        (0x00C9, 0x00E9),
        (0x00CA, 0x00EA),
        (0x00CB, 0x00EB),
        (0x00CC, 0x00EC),
        (0x00CD, 0x00ED),
        (0x00CE, 0x00EE),
        (0x00CF, 0x00EF),
        (0x00D0, 0x00F0),
        (0x00D1, 0x00F1),
        (0x00D2, 0x00F2),
        (0x00D3, 0x00F3),
        (0x00D4, 0x00F4),
        (0x00D5, 0x00F5),
        (0x00D6, 0x00F6),
        (0x00D8, 0x00F8),
        (0x00D9, 0x00F9),
        (0x00DA, 0x00FA),
        (0x00DB, 0x00FB),
        (0x00DC, 0x00FC),
        (0x00DD, 0x00FD),
        (0x00DE, 0x00FE),
        (0x0100, 0x0101),
        (0x0102, 0x0103),
        (0x0104, 0x0105),
        (0x0106, 0x0107),
        (0x0108, 0x0109),
        (0x010A, 0x010B),
        (0x010C, 0x010D),
        (0x010E, 0x010F),
        (0x0110, 0x0111),
        (0x0112, 0x0113),
        (0x0114, 0x0115),
        (0x0116, 0x0117),
        (0x0118, 0x0119),
        (0x011A, 0x011B),
        (0x011C, 0x011D),
        (0x011E, 0x011F),
        (0x0120, 0x0121),
        (0x0122, 0x0123),
        (0x0124, 0x0125),
        (0x0126, 0x0127),
        (0x0128, 0x0129),
        (0x012A, 0x012B),
        (0x012C, 0x012D),
        (0x012E, 0x012F),
        (0x0132, 0x0133),
        (0x0134, 0x0135),
        (0x0136, 0x0137),
        (0x0139, 0x013A),
        (0x013B, 0x013C),
        (0x013D, 0x013E),
        (0x013F, 0x0140),
        (0x0141, 0x0142),
        (0x0143, 0x0144),
        (0x0145, 0x0146),
        (0x0147, 0x0148),
        (0x014A, 0x014B),
        (0x014C, 0x014D),
        (0x014E, 0x014F),
        (0x0150, 0x0151),
        (0x0152, 0x0153),
        (0x0154, 0x0155),
        (0x0156, 0x0157),
        (0x0158, 0x0159),
        (0x015A, 0x015B),
        (0x015C, 0x015D),
        (0x015E, 0x015F),
        (0x0160, 0x0161),
        (0x0162, 0x0163),
        (0x0164, 0x0165),
        (0x0166, 0x0167),
        (0x0168, 0x0169),
        (0x016A, 0x016B),
        (0x016C, 0x016D),
        (0x016E, 0x016F),
        (0x0170, 0x0171),
        (0x0172, 0x0173),
        (0x0174, 0x0175),
        (0x0176, 0x0177),
        (0x0178, 0x00FF),
        (0x0179, 0x017A),
        (0x017B, 0x017C),
        (0x017D, 0x017E),
        (0x017F, 0x0073),
        (0x0181, 0x0253),
        (0x0182, 0x0183),
        (0x0184, 0x0185),
        (0x0186, 0x0254),
        (0x0187, 0x0188),
        (0x0189, 0x0256),
        (0x018A, 0x0257),
        (0x018B, 0x018C),
        (0x018E, 0x01DD),
        (0x018F, 0x0259),
        (0x0190, 0x025B),
        (0x0191, 0x0192),
        (0x0193, 0x0260),
        (0x0194, 0x0263),
        (0x0196, 0x0269),
        (0x0197, 0x0268),
        (0x0198, 0x0199),
        (0x019C, 0x026F),
        (0x019D, 0x0272),
        (0x019F, 0x0275),
        (0x01A0, 0x01A1),
        (0x01A2, 0x01A3),
        (0x01A4, 0x01A5),
        (0x01A6, 0x0280),
        (0x01A7, 0x01A8),
        (0x01A9, 0x0283),
        (0x01AC, 0x01AD),
        (0x01AE, 0x0288),
        (0x01AF, 0x01B0),
        (0x01B1, 0x028A),
        (0x01B2, 0x028B),
        (0x01B3, 0x01B4),
        (0x01B5, 0x01B6),
        (0x01B7, 0x0292),
        (0x01B8, 0x01B9),
        (0x01BC, 0x01BD),
        (0x01C4, 0x01C6),
        (0x01C5, 0x01C6),
        (0x01C7, 0x01C9),
        (0x01C8, 0x01C9),
        (0x01CA, 0x01CC),
        (0x01CB, 0x01CC),
        (0x01CD, 0x01CE),
        (0x01CF, 0x01D0),
        (0x01D1, 0x01D2),
        (0x01D3, 0x01D4),
        (0x01D5, 0x01D6),
        (0x01D7, 0x01D8),
        (0x01D9, 0x01DA),
        (0x01DB, 0x01DC),
        (0x01DE, 0x01DF),
        (0x01E0, 0x01E1),
        (0x01E2, 0x01E3),
        (0x01E4, 0x01E5),
        (0x01E6, 0x01E7),
        (0x01E8, 0x01E9),
        (0x01EA, 0x01EB),
        (0x01EC, 0x01ED),
        (0x01EE, 0x01EF),
        (0x01F1, 0x01F3),
        (0x01F2, 0x01F3),
        (0x01F4, 0x01F5),
        (0x01F6, 0x0195),
        (0x01F7, 0x01BF),
        (0x01F8, 0x01F9),
        (0x01FA, 0x01FB),
        (0x01FC, 0x01FD),
        (0x01FE, 0x01FF),
        (0x0200, 0x0201),
        (0x0202, 0x0203),
        (0x0204, 0x0205),
        (0x0206, 0x0207),
        (0x0208, 0x0209),
        (0x020A, 0x020B),
        (0x020C, 0x020D),
        (0x020E, 0x020F),
        (0x0210, 0x0211),
        (0x0212, 0x0213),
        (0x0214, 0x0215),
        (0x0216, 0x0217),
        (0x0218, 0x0219),
        (0x021A, 0x021B),
        (0x021C, 0x021D),
        (0x021E, 0x021F),
        (0x0220, 0x019E),
        (0x0222, 0x0223),
        (0x0224, 0x0225),
        (0x0226, 0x0227),
        (0x0228, 0x0229),
        (0x022A, 0x022B),
        (0x022C, 0x022D),
        (0x022E, 0x022F),
        (0x0230, 0x0231),
        (0x0232, 0x0233),
        (0x023A, 0x2C65),
        (0x023B, 0x023C),
        (0x023D, 0x019A),
        (0x023E, 0x2C66),
        (0x0241, 0x0242),
        (0x0243, 0x0180),
        (0x0244, 0x0289),
        (0x0245, 0x028C),
        (0x0246, 0x0247),
        (0x0248, 0x0249),
        (0x024A, 0x024B),
        (0x024C, 0x024D),
        (0x024E, 0x024F),
        (0x0345, 0x03B9),
        (0x0370, 0x0371),
        (0x0372, 0x0373),
        (0x0376, 0x0377),
        (0x037F, 0x03F3),
        (0x0386, 0x03AC),
        (0x0388, 0x03AD),
        (0x0389, 0x03AE),
        (0x038A, 0x03AF),
        (0x038C, 0x03CC),
        (0x038E, 0x03CD),
        (0x038F, 0x03CE),
        (0x0391, 0x03B1),
        (0x0392, 0x03B2),
        (0x0393, 0x03B3),
        (0x0394, 0x03B4),
        (0x0395, 0x03B5),
        (0x0396, 0x03B6),
        (0x0397, 0x03B7),
        (0x0398, 0x03B8),
        (0x0399, 0x03B9),
        (0x039A, 0x03BA),
        (0x039B, 0x03BB),
        (0x039C, 0x03BC),
        (0x039D, 0x03BD),
        (0x039E, 0x03BE),
        (0x039F, 0x03BF),
        (0x03A0, 0x03C0),
        (0x03A1, 0x03C1),
        (0x03A3, 0x03C3),
        (0x03A4, 0x03C4),
        (0x03A5, 0x03C5),
        (0x03A6, 0x03C6),
        (0x03A7, 0x03C7),
        (0x03A8, 0x03C8),
        (0x03A9, 0x03C9),
        (0x03AA, 0x03CA),
        (0x03AB, 0x03CB),
        (0x03C2, 0x03C3),
        (0x03CF, 0x03D7),
        (0x03D0, 0x03B2),
        (0x03D1, 0x03B8),
        (0x03D5, 0x03C6),
        (0x03D6, 0x03C0),
        (0x03D8, 0x03D9),
        (0x03DA, 0x03DB),
        (0x03DC, 0x03DD),
        (0x03DE, 0x03DF),
        (0x03E0, 0x03E1),
        (0x03E2, 0x03E3),
        (0x03E4, 0x03E5),
        (0x03E6, 0x03E7),
        (0x03E8, 0x03E9),
        (0x03EA, 0x03EB),
        (0x03EC, 0x03ED),
        (0x03EE, 0x03EF),
        (0x03F0, 0x03BA),
        (0x03F1, 0x03C1),
        (0x03F4, 0x03B8),
        (0x03F5, 0x03B5),
        (0x03F7, 0x03F8),
        (0x03F9, 0x03F2),
        (0x03FA, 0x03FB),
        (0x03FD, 0x037B),
        (0x03FE, 0x037C),
        (0x03FF, 0x037D),
        (0x0400, 0x0450),
        (0x0401, 0x0451),
        (0x0402, 0x0452),
        (0x0403, 0x0453),
        (0x0404, 0x0454),
        (0x0405, 0x0455),
        (0x0406, 0x0456),
        (0x0407, 0x0457),
        (0x0408, 0x0458),
        (0x0409, 0x0459),
        (0x040A, 0x045A),
        (0x040B, 0x045B),
        (0x040C, 0x045C),
        (0x040D, 0x045D),
        (0x040E, 0x045E),
        (0x040F, 0x045F),
        (0x0410, 0x0430),
        (0x0411, 0x0431),
        (0x0412, 0x0432),
        (0x0413, 0x0433),
        (0x0414, 0x0434),
        (0x0415, 0x0435),
        (0x0416, 0x0436),
        (0x0417, 0x0437),
        (0x0418, 0x0438),
        (0x0419, 0x0439),
        (0x041A, 0x043A),
        (0x041B, 0x043B),
        (0x041C, 0x043C),
        (0x041D, 0x043D),
        (0x041E, 0x043E),
        (0x041F, 0x043F),
        (0x0420, 0x0440),
        (0x0421, 0x0441),
        (0x0422, 0x0442),
        (0x0423, 0x0443),
        (0x0424, 0x0444),
        (0x0425, 0x0445),
        (0x0426, 0x0446),
        (0x0427, 0x0447),
        (0x0428, 0x0448),
        (0x0429, 0x0449),
        (0x042A, 0x044A),
        (0x042B, 0x044B),
        (0x042C, 0x044C),
        (0x042D, 0x044D),
        (0x042E, 0x044E),
        (0x042F, 0x044F),
        (0x0460, 0x0461),
        (0x0462, 0x0463),
        (0x0464, 0x0465),
        (0x0466, 0x0467),
        (0x0468, 0x0469),
        (0x046A, 0x046B),
        (0x046C, 0x046D),
        (0x046E, 0x046F),
        (0x0470, 0x0471),
        (0x0472, 0x0473),
        (0x0474, 0x0475),
        (0x0476, 0x0477),
        (0x0478, 0x0479),
        (0x047A, 0x047B),
        (0x047C, 0x047D),
        (0x047E, 0x047F),
        (0x0480, 0x0481),
        (0x048A, 0x048B),
        (0x048C, 0x048D),
        (0x048E, 0x048F),
        (0x0490, 0x0491),
        (0x0492, 0x0493),
        (0x0494, 0x0495),
        (0x0496, 0x0497),
        (0x0498, 0x0499),
        (0x049A, 0x049B),
        (0x049C, 0x049D),
        (0x049E, 0x049F),
        (0x04A0, 0x04A1),
        (0x04A2, 0x04A3),
        (0x04A4, 0x04A5),
        (0x04A6, 0x04A7),
        (0x04A8, 0x04A9),
        (0x04AA, 0x04AB),
        (0x04AC, 0x04AD),
        (0x04AE, 0x04AF),
        (0x04B0, 0x04B1),
        (0x04B2, 0x04B3),
        (0x04B4, 0x04B5),
        (0x04B6, 0x04B7),
        (0x04B8, 0x04B9),
        (0x04BA, 0x04BB),
        (0x04BC, 0x04BD),
        (0x04BE, 0x04BF),
        (0x04C0, 0x04CF),
        (0x04C1, 0x04C2),
        (0x04C3, 0x04C4),
        (0x04C5, 0x04C6),
        (0x04C7, 0x04C8),
        (0x04C9, 0x04CA),
        (0x04CB, 0x04CC),
        (0x04CD, 0x04CE),
        (0x04D0, 0x04D1),
        (0x04D2, 0x04D3),
        (0x04D4, 0x04D5),
        (0x04D6, 0x04D7),
        (0x04D8, 0x04D9),
        (0x04DA, 0x04DB),
        (0x04DC, 0x04DD),
        (0x04DE, 0x04DF),
        (0x04E0, 0x04E1),
        (0x04E2, 0x04E3),
        (0x04E4, 0x04E5),
        (0x04E6, 0x04E7),
        (0x04E8, 0x04E9),
        (0x04EA, 0x04EB),
        (0x04EC, 0x04ED),
        (0x04EE, 0x04EF),
        (0x04F0, 0x04F1),
        (0x04F2, 0x04F3),
        (0x04F4, 0x04F5),
        (0x04F6, 0x04F7),
        (0x04F8, 0x04F9),
        (0x04FA, 0x04FB),
        (0x04FC, 0x04FD),
        (0x04FE, 0x04FF),
        (0x0500, 0x0501),
        (0x0502, 0x0503),
        (0x0504, 0x0505),
        (0x0506, 0x0507),
        (0x0508, 0x0509),
        (0x050A, 0x050B),
        (0x050C, 0x050D),
        (0x050E, 0x050F),
        (0x0510, 0x0511),
        (0x0512, 0x0513),
        (0x0514, 0x0515),
        (0x0516, 0x0517),
        (0x0518, 0x0519),
        (0x051A, 0x051B),
        (0x051C, 0x051D),
        (0x051E, 0x051F),
        (0x0520, 0x0521),
        (0x0522, 0x0523),
        (0x0524, 0x0525),
        (0x0526, 0x0527),
        (0x0528, 0x0529),
        (0x052A, 0x052B),
        (0x052C, 0x052D),
        (0x052E, 0x052F),
        (0x0531, 0x0561),
        (0x0532, 0x0562),
        (0x0533, 0x0563),
        (0x0534, 0x0564),
        (0x0535, 0x0565),
        (0x0536, 0x0566),
        (0x0537, 0x0567),
        (0x0538, 0x0568),
        (0x0539, 0x0569),
        (0x053A, 0x056A),
        (0x053B, 0x056B),
        (0x053C, 0x056C),
        (0x053D, 0x056D),
        (0x053E, 0x056E),
        (0x053F, 0x056F),
        (0x0540, 0x0570),
        (0x0541, 0x0571),
        (0x0542, 0x0572),
        (0x0543, 0x0573),
        (0x0544, 0x0574),
        (0x0545, 0x0575),
        (0x0546, 0x0576),
        (0x0547, 0x0577),
        (0x0548, 0x0578),
        (0x0549, 0x0579),
        (0x054A, 0x057A),
        (0x054B, 0x057B),
        (0x054C, 0x057C),
        (0x054D, 0x057D),
        (0x054E, 0x057E),
        (0x054F, 0x057F),
        (0x0550, 0x0580),
        (0x0551, 0x0581),
        (0x0552, 0x0582),
        (0x0553, 0x0583),
        (0x0554, 0x0584),
        (0x0555, 0x0585),
        (0x0556, 0x0586),
        (0x10A0, 0x2D00),
        (0x10A1, 0x2D01),
        (0x10A2, 0x2D02),
        (0x10A3, 0x2D03),
        (0x10A4, 0x2D04),
        (0x10A5, 0x2D05),
        (0x10A6, 0x2D06),
        (0x10A7, 0x2D07),
        (0x10A8, 0x2D08),
        (0x10A9, 0x2D09),
        (0x10AA, 0x2D0A),
        (0x10AB, 0x2D0B),
        (0x10AC, 0x2D0C),
        (0x10AD, 0x2D0D),
        (0x10AE, 0x2D0E),
        (0x10AF, 0x2D0F),
        (0x10B0, 0x2D10),
        (0x10B1, 0x2D11),
        (0x10B2, 0x2D12),
        (0x10B3, 0x2D13),
        (0x10B4, 0x2D14),
        (0x10B5, 0x2D15),
        (0x10B6, 0x2D16),
        (0x10B7, 0x2D17),
        (0x10B8, 0x2D18),
        (0x10B9, 0x2D19),
        (0x10BA, 0x2D1A),
        (0x10BB, 0x2D1B),
        (0x10BC, 0x2D1C),
        (0x10BD, 0x2D1D),
        (0x10BE, 0x2D1E),
        (0x10BF, 0x2D1F),
        (0x10C0, 0x2D20),
        (0x10C1, 0x2D21),
        (0x10C2, 0x2D22),
        (0x10C3, 0x2D23),
        (0x10C4, 0x2D24),
        (0x10C5, 0x2D25),
        (0x10C7, 0x2D27),
        (0x10CD, 0x2D2D),
        (0x13F8, 0x13F0),
        (0x13F9, 0x13F1),
        (0x13FA, 0x13F2),
        (0x13FB, 0x13F3),
        (0x13FC, 0x13F4),
        (0x13FD, 0x13F5),
        (0x1C80, 0x0432),
        (0x1C81, 0x0434),
        (0x1C82, 0x043E),
        (0x1C83, 0x0441),
        (0x1C84, 0x0442),
        (0x1C85, 0x0442),
        (0x1C86, 0x044A),
        (0x1C87, 0x0463),
        (0x1C88, 0xA64B),
        (0x1C90, 0x10D0),
        (0x1C91, 0x10D1),
        (0x1C92, 0x10D2),
        (0x1C93, 0x10D3),
        (0x1C94, 0x10D4),
        (0x1C95, 0x10D5),
        (0x1C96, 0x10D6),
        (0x1C97, 0x10D7),
        (0x1C98, 0x10D8),
        (0x1C99, 0x10D9),
        (0x1C9A, 0x10DA),
        (0x1C9B, 0x10DB),
        (0x1C9C, 0x10DC),
        (0x1C9D, 0x10DD),
        (0x1C9E, 0x10DE),
        (0x1C9F, 0x10DF),
        (0x1CA0, 0x10E0),
        (0x1CA1, 0x10E1),
        (0x1CA2, 0x10E2),
        (0x1CA3, 0x10E3),
        (0x1CA4, 0x10E4),
        (0x1CA5, 0x10E5),
        (0x1CA6, 0x10E6),
        (0x1CA7, 0x10E7),
        (0x1CA8, 0x10E8),
        (0x1CA9, 0x10E9),
        (0x1CAA, 0x10EA),
        (0x1CAB, 0x10EB),
        (0x1CAC, 0x10EC),
        (0x1CAD, 0x10ED),
        (0x1CAE, 0x10EE),
        (0x1CAF, 0x10EF),
        (0x1CB0, 0x10F0),
        (0x1CB1, 0x10F1),
        (0x1CB2, 0x10F2),
        (0x1CB3, 0x10F3),
        (0x1CB4, 0x10F4),
        (0x1CB5, 0x10F5),
        (0x1CB6, 0x10F6),
        (0x1CB7, 0x10F7),
        (0x1CB8, 0x10F8),
        (0x1CB9, 0x10F9),
        (0x1CBA, 0x10FA),
        (0x1CBD, 0x10FD),
        (0x1CBE, 0x10FE),
        (0x1CBF, 0x10FF),
        (0x1E00, 0x1E01),
        (0x1E02, 0x1E03),
        (0x1E04, 0x1E05),
        (0x1E06, 0x1E07),
        (0x1E08, 0x1E09),
        (0x1E0A, 0x1E0B),
        (0x1E0C, 0x1E0D),
        (0x1E0E, 0x1E0F),
        (0x1E10, 0x1E11),
        (0x1E12, 0x1E13),
        (0x1E14, 0x1E15),
        (0x1E16, 0x1E17),
        (0x1E18, 0x1E19),
        (0x1E1A, 0x1E1B),
        (0x1E1C, 0x1E1D),
        (0x1E1E, 0x1E1F),
        (0x1E20, 0x1E21),
        (0x1E22, 0x1E23),
        (0x1E24, 0x1E25),
        (0x1E26, 0x1E27),
        (0x1E28, 0x1E29),
        (0x1E2A, 0x1E2B),
        (0x1E2C, 0x1E2D),
        (0x1E2E, 0x1E2F),
        (0x1E30, 0x1E31),
        (0x1E32, 0x1E33),
        (0x1E34, 0x1E35),
        (0x1E36, 0x1E37),
        (0x1E38, 0x1E39),
        (0x1E3A, 0x1E3B),
        (0x1E3C, 0x1E3D),
        (0x1E3E, 0x1E3F),
        (0x1E40, 0x1E41),
        (0x1E42, 0x1E43),
        (0x1E44, 0x1E45),
        (0x1E46, 0x1E47),
        (0x1E48, 0x1E49),
        (0x1E4A, 0x1E4B),
        (0x1E4C, 0x1E4D),
        (0x1E4E, 0x1E4F),
        (0x1E50, 0x1E51),
        (0x1E52, 0x1E53),
        (0x1E54, 0x1E55),
        (0x1E56, 0x1E57),
        (0x1E58, 0x1E59),
        (0x1E5A, 0x1E5B),
        (0x1E5C, 0x1E5D),
        (0x1E5E, 0x1E5F),
        (0x1E60, 0x1E61),
        (0x1E62, 0x1E63),
        (0x1E64, 0x1E65),
        (0x1E66, 0x1E67),
        (0x1E68, 0x1E69),
        (0x1E6A, 0x1E6B),
        (0x1E6C, 0x1E6D),
        (0x1E6E, 0x1E6F),
        (0x1E70, 0x1E71),
        (0x1E72, 0x1E73),
        (0x1E74, 0x1E75),
        (0x1E76, 0x1E77),
        (0x1E78, 0x1E79),
        (0x1E7A, 0x1E7B),
        (0x1E7C, 0x1E7D),
        (0x1E7E, 0x1E7F),
        (0x1E80, 0x1E81),
        (0x1E82, 0x1E83),
        (0x1E84, 0x1E85),
        (0x1E86, 0x1E87),
        (0x1E88, 0x1E89),
        (0x1E8A, 0x1E8B),
        (0x1E8C, 0x1E8D),
        (0x1E8E, 0x1E8F),
        (0x1E90, 0x1E91),
        (0x1E92, 0x1E93),
        (0x1E94, 0x1E95),
        (0x1E9B, 0x1E61),
        (0x1EA0, 0x1EA1),
        (0x1EA2, 0x1EA3),
        (0x1EA4, 0x1EA5),
        (0x1EA6, 0x1EA7),
        (0x1EA8, 0x1EA9),
        (0x1EAA, 0x1EAB),
        (0x1EAC, 0x1EAD),
        (0x1EAE, 0x1EAF),
        (0x1EB0, 0x1EB1),
        (0x1EB2, 0x1EB3),
        (0x1EB4, 0x1EB5),
        (0x1EB6, 0x1EB7),
        (0x1EB8, 0x1EB9),
        (0x1EBA, 0x1EBB),
        (0x1EBC, 0x1EBD),
        (0x1EBE, 0x1EBF),
        (0x1EC0, 0x1EC1),
        (0x1EC2, 0x1EC3),
        (0x1EC4, 0x1EC5),
        (0x1EC6, 0x1EC7),
        (0x1EC8, 0x1EC9),
        (0x1ECA, 0x1ECB),
        (0x1ECC, 0x1ECD),
        (0x1ECE, 0x1ECF),
        (0x1ED0, 0x1ED1),
        (0x1ED2, 0x1ED3),
        (0x1ED4, 0x1ED5),
        (0x1ED6, 0x1ED7),
        (0x1ED8, 0x1ED9),
        (0x1EDA, 0x1EDB),
        (0x1EDC, 0x1EDD),
        (0x1EDE, 0x1EDF),
        (0x1EE0, 0x1EE1),
        (0x1EE2, 0x1EE3),
        (0x1EE4, 0x1EE5),
        (0x1EE6, 0x1EE7),
        (0x1EE8, 0x1EE9),
        (0x1EEA, 0x1EEB),
        (0x1EEC, 0x1EED),
        (0x1EEE, 0x1EEF),
        (0x1EF0, 0x1EF1),
        (0x1EF2, 0x1EF3),
        (0x1EF4, 0x1EF5),
        (0x1EF6, 0x1EF7),
        (0x1EF8, 0x1EF9),
        (0x1EFA, 0x1EFB),
        (0x1EFC, 0x1EFD),
        (0x1EFE, 0x1EFF),
        (0x1F08, 0x1F00),
        (0x1F09, 0x1F01),
        (0x1F0A, 0x1F02),
        (0x1F0B, 0x1F03),
        (0x1F0C, 0x1F04),
        (0x1F0D, 0x1F05),
        (0x1F0E, 0x1F06),
        (0x1F0F, 0x1F07),
        (0x1F18, 0x1F10),
        (0x1F19, 0x1F11),
        (0x1F1A, 0x1F12),
        (0x1F1B, 0x1F13),
        (0x1F1C, 0x1F14),
        (0x1F1D, 0x1F15),
        (0x1F28, 0x1F20),
        (0x1F29, 0x1F21),
        (0x1F2A, 0x1F22),
        (0x1F2B, 0x1F23),
        (0x1F2C, 0x1F24),
        (0x1F2D, 0x1F25),
        (0x1F2E, 0x1F26),
        (0x1F2F, 0x1F27),
        (0x1F38, 0x1F30),
        (0x1F39, 0x1F31),
        (0x1F3A, 0x1F32),
        (0x1F3B, 0x1F33),
        (0x1F3C, 0x1F34),
        (0x1F3D, 0x1F35),
        (0x1F3E, 0x1F36),
        (0x1F3F, 0x1F37),
        (0x1F48, 0x1F40),
        (0x1F49, 0x1F41),
        (0x1F4A, 0x1F42),
        (0x1F4B, 0x1F43),
        (0x1F4C, 0x1F44),
        (0x1F4D, 0x1F45),
        (0x1F59, 0x1F51),
        (0x1F5B, 0x1F53),
        (0x1F5D, 0x1F55),
        (0x1F5F, 0x1F57),
        (0x1F68, 0x1F60),
        (0x1F69, 0x1F61),
        (0x1F6A, 0x1F62),
        (0x1F6B, 0x1F63),
        (0x1F6C, 0x1F64),
        (0x1F6D, 0x1F65),
        (0x1F6E, 0x1F66),
        (0x1F6F, 0x1F67),
        (0x1FB8, 0x1FB0),
        (0x1FB9, 0x1FB1),
        (0x1FBA, 0x1F70),
        (0x1FBB, 0x1F71),
        (0x1FBE, 0x03B9),
        (0x1FC8, 0x1F72),
        (0x1FC9, 0x1F73),
        (0x1FCA, 0x1F74),
        (0x1FCB, 0x1F75),
        (0x1FD8, 0x1FD0),
        (0x1FD9, 0x1FD1),
        (0x1FDA, 0x1F76),
        (0x1FDB, 0x1F77),
        (0x1FE8, 0x1FE0),
        (0x1FE9, 0x1FE1),
        (0x1FEA, 0x1F7A),
        (0x1FEB, 0x1F7B),
        (0x1FEC, 0x1FE5),
        (0x1FF8, 0x1F78),
        (0x1FF9, 0x1F79),
        (0x1FFA, 0x1F7C),
        (0x1FFB, 0x1F7D),
        (0x2126, 0x03C9),
        (0x212A, 0x006B),
        (0x212B, 0x00E5),
        (0x2132, 0x214E),
        (0x2160, 0x2170),
        (0x2161, 0x2171),
        (0x2162, 0x2172),
        (0x2163, 0x2173),
        (0x2164, 0x2174),
        (0x2165, 0x2175),
        (0x2166, 0x2176),
        (0x2167, 0x2177),
        (0x2168, 0x2178),
        (0x2169, 0x2179),
        (0x216A, 0x217A),
        (0x216B, 0x217B),
        (0x216C, 0x217C),
        (0x216D, 0x217D),
        (0x216E, 0x217E),
        (0x216F, 0x217F),
        (0x2183, 0x2184),
        (0x24B6, 0x24D0),
        (0x24B7, 0x24D1),
        (0x24B8, 0x24D2),
        (0x24B9, 0x24D3),
        (0x24BA, 0x24D4),
        (0x24BB, 0x24D5),
        (0x24BC, 0x24D6),
        (0x24BD, 0x24D7),
        (0x24BE, 0x24D8),
        (0x24BF, 0x24D9),
        (0x24C0, 0x24DA),
        (0x24C1, 0x24DB),
        (0x24C2, 0x24DC),
        (0x24C3, 0x24DD),
        (0x24C4, 0x24DE),
        (0x24C5, 0x24DF),
        (0x24C6, 0x24E0),
        (0x24C7, 0x24E1),
        (0x24C8, 0x24E2),
        (0x24C9, 0x24E3),
        (0x24CA, 0x24E4),
        (0x24CB, 0x24E5),
        (0x24CC, 0x24E6),
        (0x24CD, 0x24E7),
        (0x24CE, 0x24E8),
        (0x24CF, 0x24E9),
        (0x2C00, 0x2C30),
        (0x2C01, 0x2C31),
        (0x2C02, 0x2C32),
        (0x2C03, 0x2C33),
        (0x2C04, 0x2C34),
        (0x2C05, 0x2C35),
        (0x2C06, 0x2C36),
        (0x2C07, 0x2C37),
        (0x2C08, 0x2C38),
        (0x2C09, 0x2C39),
        (0x2C0A, 0x2C3A),
        (0x2C0B, 0x2C3B),
        (0x2C0C, 0x2C3C),
        (0x2C0D, 0x2C3D),
        (0x2C0E, 0x2C3E),
        (0x2C0F, 0x2C3F),
        (0x2C10, 0x2C40),
        (0x2C11, 0x2C41),
        (0x2C12, 0x2C42),
        (0x2C13, 0x2C43),
        (0x2C14, 0x2C44),
        (0x2C15, 0x2C45),
        (0x2C16, 0x2C46),
        (0x2C17, 0x2C47),
        (0x2C18, 0x2C48),
        (0x2C19, 0x2C49),
        (0x2C1A, 0x2C4A),
        (0x2C1B, 0x2C4B),
        (0x2C1C, 0x2C4C),
        (0x2C1D, 0x2C4D),
        (0x2C1E, 0x2C4E),
        (0x2C1F, 0x2C4F),
        (0x2C20, 0x2C50),
        (0x2C21, 0x2C51),
        (0x2C22, 0x2C52),
        (0x2C23, 0x2C53),
        (0x2C24, 0x2C54),
        (0x2C25, 0x2C55),
        (0x2C26, 0x2C56),
        (0x2C27, 0x2C57),
        (0x2C28, 0x2C58),
        (0x2C29, 0x2C59),
        (0x2C2A, 0x2C5A),
        (0x2C2B, 0x2C5B),
        (0x2C2C, 0x2C5C),
        (0x2C2D, 0x2C5D),
        (0x2C2E, 0x2C5E),
        (0x2C2F, 0x2C5F),
        (0x2C60, 0x2C61),
        (0x2C62, 0x026B),
        (0x2C63, 0x1D7D),
        (0x2C64, 0x027D),
        (0x2C67, 0x2C68),
        (0x2C69, 0x2C6A),
        (0x2C6B, 0x2C6C),
        (0x2C6D, 0x0251),
        (0x2C6E, 0x0271),
        (0x2C6F, 0x0250),
        (0x2C70, 0x0252),
        (0x2C72, 0x2C73),
        (0x2C75, 0x2C76),
        (0x2C7E, 0x023F),
        (0x2C7F, 0x0240),
        (0x2C80, 0x2C81),
        (0x2C82, 0x2C83),
        (0x2C84, 0x2C85),
        (0x2C86, 0x2C87),
        (0x2C88, 0x2C89),
        (0x2C8A, 0x2C8B),
        (0x2C8C, 0x2C8D),
        (0x2C8E, 0x2C8F),
        (0x2C90, 0x2C91),
        (0x2C92, 0x2C93),
        (0x2C94, 0x2C95),
        (0x2C96, 0x2C97),
        (0x2C98, 0x2C99),
        (0x2C9A, 0x2C9B),
        (0x2C9C, 0x2C9D),
        (0x2C9E, 0x2C9F),
        (0x2CA0, 0x2CA1),
        (0x2CA2, 0x2CA3),
        (0x2CA4, 0x2CA5),
        (0x2CA6, 0x2CA7),
        (0x2CA8, 0x2CA9),
        (0x2CAA, 0x2CAB),
        (0x2CAC, 0x2CAD),
        (0x2CAE, 0x2CAF),
        (0x2CB0, 0x2CB1),
        (0x2CB2, 0x2CB3),
        (0x2CB4, 0x2CB5),
        (0x2CB6, 0x2CB7),
        (0x2CB8, 0x2CB9),
        (0x2CBA, 0x2CBB),
        (0x2CBC, 0x2CBD),
        (0x2CBE, 0x2CBF),
        (0x2CC0, 0x2CC1),
        (0x2CC2, 0x2CC3),
        (0x2CC4, 0x2CC5),
        (0x2CC6, 0x2CC7),
        (0x2CC8, 0x2CC9),
        (0x2CCA, 0x2CCB),
        (0x2CCC, 0x2CCD),
        (0x2CCE, 0x2CCF),
        (0x2CD0, 0x2CD1),
        (0x2CD2, 0x2CD3),
        (0x2CD4, 0x2CD5),
        (0x2CD6, 0x2CD7),
        (0x2CD8, 0x2CD9),
        (0x2CDA, 0x2CDB),
        (0x2CDC, 0x2CDD),
        (0x2CDE, 0x2CDF),
        (0x2CE0, 0x2CE1),
        (0x2CE2, 0x2CE3),
        (0x2CEB, 0x2CEC),
        (0x2CED, 0x2CEE),
        (0x2CF2, 0x2CF3),
        (0xA640, 0xA641),
        (0xA642, 0xA643),
        (0xA644, 0xA645),
        (0xA646, 0xA647),
        (0xA648, 0xA649),
        (0xA64A, 0xA64B),
        (0xA64C, 0xA64D),
        (0xA64E, 0xA64F),
        (0xA650, 0xA651),
        (0xA652, 0xA653),
        (0xA654, 0xA655),
        (0xA656, 0xA657),
        (0xA658, 0xA659),
        (0xA65A, 0xA65B),
        (0xA65C, 0xA65D),
        (0xA65E, 0xA65F),
        (0xA660, 0xA661),
        (0xA662, 0xA663),
        (0xA664, 0xA665),
        (0xA666, 0xA667),
        (0xA668, 0xA669),
        (0xA66A, 0xA66B),
        (0xA66C, 0xA66D),
        (0xA680, 0xA681),
        (0xA682, 0xA683),
        (0xA684, 0xA685),
        (0xA686, 0xA687),
        (0xA688, 0xA689),
        (0xA68A, 0xA68B),
        (0xA68C, 0xA68D),
        (0xA68E, 0xA68F),
        (0xA690, 0xA691),
        (0xA692, 0xA693),
        (0xA694, 0xA695),
        (0xA696, 0xA697),
        (0xA698, 0xA699),
        (0xA69A, 0xA69B),
        (0xA722, 0xA723),
        (0xA724, 0xA725),
        (0xA726, 0xA727),
        (0xA728, 0xA729),
        (0xA72A, 0xA72B),
        (0xA72C, 0xA72D),
        (0xA72E, 0xA72F),
        (0xA732, 0xA733),
        (0xA734, 0xA735),
        (0xA736, 0xA737),
        (0xA738, 0xA739),
        (0xA73A, 0xA73B),
        (0xA73C, 0xA73D),
        (0xA73E, 0xA73F),
        (0xA740, 0xA741),
        (0xA742, 0xA743),
        (0xA744, 0xA745),
        (0xA746, 0xA747),
        (0xA748, 0xA749),
        (0xA74A, 0xA74B),
        (0xA74C, 0xA74D),
        (0xA74E, 0xA74F),
        (0xA750, 0xA751),
        (0xA752, 0xA753),
        (0xA754, 0xA755),
        (0xA756, 0xA757),
        (0xA758, 0xA759),
        (0xA75A, 0xA75B),
        (0xA75C, 0xA75D),
        (0xA75E, 0xA75F),
        (0xA760, 0xA761),
        (0xA762, 0xA763),
        (0xA764, 0xA765),
        (0xA766, 0xA767),
        (0xA768, 0xA769),
        (0xA76A, 0xA76B),
        (0xA76C, 0xA76D),
        (0xA76E, 0xA76F),
        (0xA779, 0xA77A),
        (0xA77B, 0xA77C),
        (0xA77D, 0x1D79),
        (0xA77E, 0xA77F),
        (0xA780, 0xA781),
        (0xA782, 0xA783),
        (0xA784, 0xA785),
        (0xA786, 0xA787),
        (0xA78B, 0xA78C),
        (0xA78D, 0x0265),
        (0xA790, 0xA791),
        (0xA792, 0xA793),
        (0xA796, 0xA797),
        (0xA798, 0xA799),
        (0xA79A, 0xA79B),
        (0xA79C, 0xA79D),
        (0xA79E, 0xA79F),
        (0xA7A0, 0xA7A1),
        (0xA7A2, 0xA7A3),
        (0xA7A4, 0xA7A5),
        (0xA7A6, 0xA7A7),
        (0xA7A8, 0xA7A9),
        (0xA7AA, 0x0266),
        (0xA7AB, 0x025C),
        (0xA7AC, 0x0261),
        (0xA7AD, 0x026C),
        (0xA7AE, 0x026A),
        (0xA7B0, 0x029E),
        (0xA7B1, 0x0287),
        (0xA7B2, 0x029D),
        (0xA7B3, 0xAB53),
        (0xA7B4, 0xA7B5),
        (0xA7B6, 0xA7B7),
        (0xA7B8, 0xA7B9),
        (0xA7BA, 0xA7BB),
        (0xA7BC, 0xA7BD),
        (0xA7BE, 0xA7BF),
        (0xA7C0, 0xA7C1),
        (0xA7C2, 0xA7C3),
        (0xA7C4, 0xA794),
        (0xA7C5, 0x0282),
        (0xA7C6, 0x1D8E),
        (0xA7C7, 0xA7C8),
        (0xA7C9, 0xA7CA),
        (0xA7D0, 0xA7D1),
        (0xA7D6, 0xA7D7),
        (0xA7D8, 0xA7D9),
        (0xA7F5, 0xA7F6),
        (0xAB70, 0x13A0),
        (0xAB71, 0x13A1),
        (0xAB72, 0x13A2),
        (0xAB73, 0x13A3),
        (0xAB74, 0x13A4),
        (0xAB75, 0x13A5),
        (0xAB76, 0x13A6),
        (0xAB77, 0x13A7),
        (0xAB78, 0x13A8),
        (0xAB79, 0x13A9),
        (0xAB7A, 0x13AA),
        (0xAB7B, 0x13AB),
        (0xAB7C, 0x13AC),
        (0xAB7D, 0x13AD),
        (0xAB7E, 0x13AE),
        (0xAB7F, 0x13AF),
        (0xAB80, 0x13B0),
        (0xAB81, 0x13B1),
        (0xAB82, 0x13B2),
        (0xAB83, 0x13B3),
        (0xAB84, 0x13B4),
        (0xAB85, 0x13B5),
        (0xAB86, 0x13B6),
        (0xAB87, 0x13B7),
        (0xAB88, 0x13B8),
        (0xAB89, 0x13B9),
        (0xAB8A, 0x13BA),
        (0xAB8B, 0x13BB),
        (0xAB8C, 0x13BC),
        (0xAB8D, 0x13BD),
        (0xAB8E, 0x13BE),
        (0xAB8F, 0x13BF),
        (0xAB90, 0x13C0),
        (0xAB91, 0x13C1),
        (0xAB92, 0x13C2),
        (0xAB93, 0x13C3),
        (0xAB94, 0x13C4),
        (0xAB95, 0x13C5),
        (0xAB96, 0x13C6),
        (0xAB97, 0x13C7),
        (0xAB98, 0x13C8),
        (0xAB99, 0x13C9),
        (0xAB9A, 0x13CA),
        (0xAB9B, 0x13CB),
        (0xAB9C, 0x13CC),
        (0xAB9D, 0x13CD),
        (0xAB9E, 0x13CE),
        (0xAB9F, 0x13CF),
        (0xABA0, 0x13D0),
        (0xABA1, 0x13D1),
        (0xABA2, 0x13D2),
        (0xABA3, 0x13D3),
        (0xABA4, 0x13D4),
        (0xABA5, 0x13D5),
        (0xABA6, 0x13D6),
        (0xABA7, 0x13D7),
        (0xABA8, 0x13D8),
        (0xABA9, 0x13D9),
        (0xABAA, 0x13DA),
        (0xABAB, 0x13DB),
        (0xABAC, 0x13DC),
        (0xABAD, 0x13DD),
        (0xABAE, 0x13DE),
        (0xABAF, 0x13DF),
        (0xABB0, 0x13E0),
        (0xABB1, 0x13E1),
        (0xABB2, 0x13E2),
        (0xABB3, 0x13E3),
        (0xABB4, 0x13E4),
        (0xABB5, 0x13E5),
        (0xABB6, 0x13E6),
        (0xABB7, 0x13E7),
        (0xABB8, 0x13E8),
        (0xABB9, 0x13E9),
        (0xABBA, 0x13EA),
        (0xABBB, 0x13EB),
        (0xABBC, 0x13EC),
        (0xABBD, 0x13ED),
        (0xABBE, 0x13EE),
        (0xABBF, 0x13EF),
        (0xFF21, 0xFF41),
        (0xFF22, 0xFF42),
        (0xFF23, 0xFF43),
        (0xFF24, 0xFF44),
        (0xFF25, 0xFF45),
        (0xFF26, 0xFF46),
        (0xFF27, 0xFF47),
        (0xFF28, 0xFF48),
        (0xFF29, 0xFF49),
        (0xFF2A, 0xFF4A),
        (0xFF2B, 0xFF4B),
        (0xFF2C, 0xFF4C),
        (0xFF2D, 0xFF4D),
        (0xFF2E, 0xFF4E),
        (0xFF2F, 0xFF4F),
        (0xFF30, 0xFF50),
        (0xFF31, 0xFF51),
        (0xFF32, 0xFF52),
        (0xFF33, 0xFF53),
        (0xFF34, 0xFF54),
        (0xFF35, 0xFF55),
        (0xFF36, 0xFF56),
        (0xFF37, 0xFF57),
        (0xFF38, 0xFF58),
        (0xFF39, 0xFF59),
        (0xFF3A, 0xFF5A),
        (0x10400, 0x10428),
        (0x10401, 0x10429),
        (0x10402, 0x1042A),
        (0x10403, 0x1042B),
        (0x10404, 0x1042C),
        (0x10405, 0x1042D),
        (0x10406, 0x1042E),
        (0x10407, 0x1042F),
        (0x10408, 0x10430),
        (0x10409, 0x10431),
        (0x1040A, 0x10432),
        (0x1040B, 0x10433),
        (0x1040C, 0x10434),
        (0x1040D, 0x10435),
        (0x1040E, 0x10436),
        (0x1040F, 0x10437),
        (0x10410, 0x10438),
        (0x10411, 0x10439),
        (0x10412, 0x1043A),
        (0x10413, 0x1043B),
        (0x10414, 0x1043C),
        (0x10415, 0x1043D),
        (0x10416, 0x1043E),
        (0x10417, 0x1043F),
        (0x10418, 0x10440),
        (0x10419, 0x10441),
        (0x1041A, 0x10442),
        (0x1041B, 0x10443),
        (0x1041C, 0x10444),
        (0x1041D, 0x10445),
        (0x1041E, 0x10446),
        (0x1041F, 0x10447),
        (0x10420, 0x10448),
        (0x10421, 0x10449),
        (0x10422, 0x1044A),
        (0x10423, 0x1044B),
        (0x10424, 0x1044C),
        (0x10425, 0x1044D),
        (0x10426, 0x1044E),
        (0x10427, 0x1044F),
        (0x104B0, 0x104D8),
        (0x104B1, 0x104D9),
        (0x104B2, 0x104DA),
        (0x104B3, 0x104DB),
        (0x104B4, 0x104DC),
        (0x104B5, 0x104DD),
        (0x104B6, 0x104DE),
        (0x104B7, 0x104DF),
        (0x104B8, 0x104E0),
        (0x104B9, 0x104E1),
        (0x104BA, 0x104E2),
        (0x104BB, 0x104E3),
        (0x104BC, 0x104E4),
        (0x104BD, 0x104E5),
        (0x104BE, 0x104E6),
        (0x104BF, 0x104E7),
        (0x104C0, 0x104E8),
        (0x104C1, 0x104E9),
        (0x104C2, 0x104EA),
        (0x104C3, 0x104EB),
        (0x104C4, 0x104EC),
        (0x104C5, 0x104ED),
        (0x104C6, 0x104EE),
        (0x104C7, 0x104EF),
        (0x104C8, 0x104F0),
        (0x104C9, 0x104F1),
        (0x104CA, 0x104F2),
        (0x104CB, 0x104F3),
        (0x104CC, 0x104F4),
        (0x104CD, 0x104F5),
        (0x104CE, 0x104F6),
        (0x104CF, 0x104F7),
        (0x104D0, 0x104F8),
        (0x104D1, 0x104F9),
        (0x104D2, 0x104FA),
        (0x104D3, 0x104FB),
        (0x10570, 0x10597),
        (0x10571, 0x10598),
        (0x10572, 0x10599),
        (0x10573, 0x1059A),
        (0x10574, 0x1059B),
        (0x10575, 0x1059C),
        (0x10576, 0x1059D),
        (0x10577, 0x1059E),
        (0x10578, 0x1059F),
        (0x10579, 0x105A0),
        (0x1057A, 0x105A1),
        (0x1057C, 0x105A3),
        (0x1057D, 0x105A4),
        (0x1057E, 0x105A5),
        (0x1057F, 0x105A6),
        (0x10580, 0x105A7),
        (0x10581, 0x105A8),
        (0x10582, 0x105A9),
        (0x10583, 0x105AA),
        (0x10584, 0x105AB),
        (0x10585, 0x105AC),
        (0x10586, 0x105AD),
        (0x10587, 0x105AE),
        (0x10588, 0x105AF),
        (0x10589, 0x105B0),
        (0x1058A, 0x105B1),
        (0x1058C, 0x105B3),
        (0x1058D, 0x105B4),
        (0x1058E, 0x105B5),
        (0x1058F, 0x105B6),
        (0x10590, 0x105B7),
        (0x10591, 0x105B8),
        (0x10592, 0x105B9),
        (0x10594, 0x105BB),
        (0x10595, 0x105BC),
        (0x10C80, 0x10CC0),
        (0x10C81, 0x10CC1),
        (0x10C82, 0x10CC2),
        (0x10C83, 0x10CC3),
        (0x10C84, 0x10CC4),
        (0x10C85, 0x10CC5),
        (0x10C86, 0x10CC6),
        (0x10C87, 0x10CC7),
        (0x10C88, 0x10CC8),
        (0x10C89, 0x10CC9),
        (0x10C8A, 0x10CCA),
        (0x10C8B, 0x10CCB),
        (0x10C8C, 0x10CCC),
        (0x10C8D, 0x10CCD),
        (0x10C8E, 0x10CCE),
        (0x10C8F, 0x10CCF),
        (0x10C90, 0x10CD0),
        (0x10C91, 0x10CD1),
        (0x10C92, 0x10CD2),
        (0x10C93, 0x10CD3),
        (0x10C94, 0x10CD4),
        (0x10C95, 0x10CD5),
        (0x10C96, 0x10CD6),
        (0x10C97, 0x10CD7),
        (0x10C98, 0x10CD8),
        (0x10C99, 0x10CD9),
        (0x10C9A, 0x10CDA),
        (0x10C9B, 0x10CDB),
        (0x10C9C, 0x10CDC),
        (0x10C9D, 0x10CDD),
        (0x10C9E, 0x10CDE),
        (0x10C9F, 0x10CDF),
        (0x10CA0, 0x10CE0),
        (0x10CA1, 0x10CE1),
        (0x10CA2, 0x10CE2),
        (0x10CA3, 0x10CE3),
        (0x10CA4, 0x10CE4),
        (0x10CA5, 0x10CE5),
        (0x10CA6, 0x10CE6),
        (0x10CA7, 0x10CE7),
        (0x10CA8, 0x10CE8),
        (0x10CA9, 0x10CE9),
        (0x10CAA, 0x10CEA),
        (0x10CAB, 0x10CEB),
        (0x10CAC, 0x10CEC),
        (0x10CAD, 0x10CED),
        (0x10CAE, 0x10CEE),
        (0x10CAF, 0x10CEF),
        (0x10CB0, 0x10CF0),
        (0x10CB1, 0x10CF1),
        (0x10CB2, 0x10CF2),
        (0x118A0, 0x118C0),
        (0x118A1, 0x118C1),
        (0x118A2, 0x118C2),
        (0x118A3, 0x118C3),
        (0x118A4, 0x118C4),
        (0x118A5, 0x118C5),
        (0x118A6, 0x118C6),
        (0x118A7, 0x118C7),
        (0x118A8, 0x118C8),
        (0x118A9, 0x118C9),
        (0x118AA, 0x118CA),
        (0x118AB, 0x118CB),
        (0x118AC, 0x118CC),
        (0x118AD, 0x118CD),
        (0x118AE, 0x118CE),
        (0x118AF, 0x118CF),
        (0x118B0, 0x118D0),
        (0x118B1, 0x118D1),
        (0x118B2, 0x118D2),
        (0x118B3, 0x118D3),
        (0x118B4, 0x118D4),
        (0x118B5, 0x118D5),
        (0x118B6, 0x118D6),
        (0x118B7, 0x118D7),
        (0x118B8, 0x118D8),
        (0x118B9, 0x118D9),
        (0x118BA, 0x118DA),
        (0x118BB, 0x118DB),
        (0x118BC, 0x118DC),
        (0x118BD, 0x118DD),
        (0x118BE, 0x118DE),
        (0x118BF, 0x118DF),
        (0x16E40, 0x16E60),
        (0x16E41, 0x16E61),
        (0x16E42, 0x16E62),
        (0x16E43, 0x16E63),
        (0x16E44, 0x16E64),
        (0x16E45, 0x16E65),
        (0x16E46, 0x16E66),
        (0x16E47, 0x16E67),
        (0x16E48, 0x16E68),
        (0x16E49, 0x16E69),
        (0x16E4A, 0x16E6A),
        (0x16E4B, 0x16E6B),
        (0x16E4C, 0x16E6C),
        (0x16E4D, 0x16E6D),
        (0x16E4E, 0x16E6E),
        (0x16E4F, 0x16E6F),
        (0x16E50, 0x16E70),
        (0x16E51, 0x16E71),
        (0x16E52, 0x16E72),
        (0x16E53, 0x16E73),
        (0x16E54, 0x16E74),
        (0x16E55, 0x16E75),
        (0x16E56, 0x16E76),
        (0x16E57, 0x16E77),
        (0x16E58, 0x16E78),
        (0x16E59, 0x16E79),
        (0x16E5A, 0x16E7A),
        (0x16E5B, 0x16E7B),
        (0x16E5C, 0x16E7C),
        (0x16E5D, 0x16E7D),
        (0x16E5E, 0x16E7E),
        (0x16E5F, 0x16E7F),
        (0x1E900, 0x1E922),
        (0x1E901, 0x1E923),
        (0x1E902, 0x1E924),
        (0x1E903, 0x1E925),
        (0x1E904, 0x1E926),
        (0x1E905, 0x1E927),
        (0x1E906, 0x1E928),
        (0x1E907, 0x1E929),
        (0x1E908, 0x1E92A),
        (0x1E909, 0x1E92B),
        (0x1E90A, 0x1E92C),
        (0x1E90B, 0x1E92D),
        (0x1E90C, 0x1E92E),
        (0x1E90D, 0x1E92F),
        (0x1E90E, 0x1E930),
        (0x1E90F, 0x1E931),
        (0x1E910, 0x1E932),
        (0x1E911, 0x1E933),
        (0x1E912, 0x1E934),
        (0x1E913, 0x1E935),
        (0x1E914, 0x1E936),
        (0x1E915, 0x1E937),
        (0x1E916, 0x1E938),
        (0x1E917, 0x1E939),
        (0x1E918, 0x1E93A),
        (0x1E919, 0x1E93B),
        (0x1E91A, 0x1E93C),
        (0x1E91B, 0x1E93D),
        (0x1E91C, 0x1E93E),
        (0x1E91D, 0x1E93F),
        (0x1E91E, 0x1E940),
        (0x1E91F, 0x1E941),
        (0x1E920, 0x1E942),
        (0x1E921, 0x1E943),
    ];

    pub(crate) const SIMPLE_FOLDING: &[(u32, u32)] = &[
        (0x1E9E, 0x00DF),
        (0x1F88, 0x1F80),
        (0x1F89, 0x1F81),
        (0x1F8A, 0x1F82),
        (0x1F8B, 0x1F83),
        (0x1F8C, 0x1F84),
        (0x1F8D, 0x1F85),
        (0x1F8E, 0x1F86),
        (0x1F8F, 0x1F87),
        (0x1F98, 0x1F90),
        (0x1F99, 0x1F91),
        (0x1F9A, 0x1F92),
        (0x1F9B, 0x1F93),
        (0x1F9C, 0x1F94),
        (0x1F9D, 0x1F95),
        (0x1F9E, 0x1F96),
        (0x1F9F, 0x1F97),
        (0x1FA8, 0x1FA0),
        (0x1FA9, 0x1FA1),
        (0x1FAA, 0x1FA2),
        (0x1FAB, 0x1FA3),
        (0x1FAC, 0x1FA4),
        (0x1FAD, 0x1FA5),
        (0x1FAE, 0x1FA6),
        (0x1FAF, 0x1FA7),
        (0x1FBC, 0x1FB3),
        (0x1FCC, 0x1FC3),
        (0x1FFC, 0x1FF3),
    ];

    pub(crate) const FULL_FOLDING: &[(u32, &[u32])] = &[
        (0x00DF, &[0x0073, 0x0073]),
        (0x0130, &[0x0069, 0x0307]),
        (0x0149, &[0x02BC, 0x006E]),
        (0x01F0, &[0x006A, 0x030C]),
        (0x0390, &[0x03B9, 0x0308, 0x0301]),
        (0x03B0, &[0x03C5, 0x0308, 0x0301]),
        (0x0587, &[0x0565, 0x0582]),
        (0x1E96, &[0x0068, 0x0331]),
        (0x1E97, &[0x0074, 0x0308]),
        (0x1E98, &[0x0077, 0x030A]),
        (0x1E99, &[0x0079, 0x030A]),
        (0x1E9A, &[0x0061, 0x02BE]),
        (0x1F50, &[0x03C5, 0x0313]),
        (0x1F52, &[0x03C5, 0x0313, 0x0300]),
        (0x1F54, &[0x03C5, 0x0313, 0x0301]),
        (0x1F56, &[0x03C5, 0x0313, 0x0342]),
        (0x1F80, &[0x1F00, 0x03B9]),
        (0x1F81, &[0x1F01, 0x03B9]),
        (0x1F82, &[0x1F02, 0x03B9]),
        (0x1F83, &[0x1F03, 0x03B9]),
        (0x1F84, &[0x1F04, 0x03B9]),
        (0x1F85, &[0x1F05, 0x03B9]),
        (0x1F86, &[0x1F06, 0x03B9]),
        (0x1F87, &[0x1F07, 0x03B9]),
        (0x1F90, &[0x1F20, 0x03B9]),
        (0x1F91, &[0x1F21, 0x03B9]),
        (0x1F92, &[0x1F22, 0x03B9]),
        (0x1F93, &[0x1F23, 0x03B9]),
        (0x1F94, &[0x1F24, 0x03B9]),
        (0x1F95, &[0x1F25, 0x03B9]),
        (0x1F96, &[0x1F26, 0x03B9]),
        (0x1F97, &[0x1F27, 0x03B9]),
        (0x1FA0, &[0x1F60, 0x03B9]),
        (0x1FA1, &[0x1F61, 0x03B9]),
        (0x1FA2, &[0x1F62, 0x03B9]),
        (0x1FA3, &[0x1F63, 0x03B9]),
        (0x1FA4, &[0x1F64, 0x03B9]),
        (0x1FA5, &[0x1F65, 0x03B9]),
        (0x1FA6, &[0x1F66, 0x03B9]),
        (0x1FA7, &[0x1F67, 0x03B9]),
        (0x1FB2, &[0x1F70, 0x03B9]),
        (0x1FB3, &[0x03B1, 0x03B9]),
        (0x1FB4, &[0x03AC, 0x03B9]),
        (0x1FB6, &[0x03B1, 0x0342]),
        (0x1FB7, &[0x03B1, 0x0342, 0x03B9]),
        (0x1FC2, &[0x1F74, 0x03B9]),
        (0x1FC3, &[0x03B7, 0x03B9]),
        (0x1FC4, &[0x03AE, 0x03B9]),
        (0x1FC6, &[0x03B7, 0x0342]),
        (0x1FC7, &[0x03B7, 0x0342, 0x03B9]),
        (0x1FD2, &[0x03B9, 0x0308, 0x0300]),
        (0x1FD3, &[0x03B9, 0x0308, 0x0301]),
        (0x1FD6, &[0x03B9, 0x0342]),
        (0x1FD7, &[0x03B9, 0x0308, 0x0342]),
        (0x1FE2, &[0x03C5, 0x0308, 0x0300]),
        (0x1FE3, &[0x03C5, 0x0308, 0x0301]),
        (0x1FE4, &[0x03C1, 0x0313]),
        (0x1FE6, &[0x03C5, 0x0342]),
        (0x1FE7, &[0x03C5, 0x0308, 0x0342]),
        (0x1FF2, &[0x1F7C, 0x03B9]),
        (0x1FF3, &[0x03C9, 0x03B9]),
        (0x1FF4, &[0x03CE, 0x03B9]),
        (0x1FF6, &[0x03C9, 0x0342]),
        (0x1FF7, &[0x03C9, 0x0342, 0x03B9]),
        (0xFB00, &[0x0066, 0x0066]),
        (0xFB01, &[0x0066, 0x0069]),
        (0xFB02, &[0x0066, 0x006C]),
        (0xFB03, &[0x0066, 0x0066, 0x0069]),
        (0xFB04, &[0x0066, 0x0066, 0x006C]),
        (0xFB05, &[0x0073, 0x0074]),
        (0xFB06, &[0x0073, 0x0074]),
        (0xFB13, &[0x0574, 0x0576]),
        (0xFB14, &[0x0574, 0x0565]),
        (0xFB15, &[0x0574, 0x056B]),
        (0xFB16, &[0x057E, 0x0576]),
        (0xFB17, &[0x0574, 0x056D]),
    ];
}
