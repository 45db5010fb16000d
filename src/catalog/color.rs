//! The colour domain.
//!
//! Names follow the X11 colour scheme Graphviz uses by default, in the order of the
//! canonical writer table. Numbered shades (`Red1` .. `Red4`) and both spellings of
//! grey are distinct values.

domain_table! {
    /// Named colours for `color`, `fillcolor`, `fontcolor`, `bgcolor` and friends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotkit::catalog::{Color, DomainValue};
    ///
    /// assert_eq!(Color::Red.as_token(), "red");
    /// assert_eq!(Color::LightGoldenrodYellow.to_string(), "lightgoldenrodyellow");
    /// assert_eq!(Color::Unset.as_token(), "");
    /// ```
    pub enum Color {
        AliceBlue => "aliceblue",
        AntiqueWhite => "antiquewhite",
        AntiqueWhite1 => "antiquewhite1",
        AntiqueWhite2 => "antiquewhite2",
        AntiqueWhite3 => "antiquewhite3",
        AntiqueWhite4 => "antiquewhite4",
        Aquamarine => "aquamarine",
        Aquamarine1 => "aquamarine1",
        Aquamarine2 => "aquamarine2",
        Aquamarine3 => "aquamarine3",
        Aquamarine4 => "aquamarine4",
        Azure => "azure",
        Azure1 => "azure1",
        Azure2 => "azure2",
        Azure3 => "azure3",
        Azure4 => "azure4",
        Beige => "beige",
        Bisque => "bisque",
        Bisque1 => "bisque1",
        Bisque2 => "bisque2",
        Bisque3 => "bisque3",
        Bisque4 => "bisque4",
        Black => "black",
        BlanchedAlmond => "blanchedalmond",
        Blue => "blue",
        Blue1 => "blue1",
        Blue2 => "blue2",
        Blue3 => "blue3",
        Blue4 => "blue4",
        BlueViolet => "blueviolet",
        Brown => "brown",
        Brown1 => "brown1",
        Brown2 => "brown2",
        Brown3 => "brown3",
        Brown4 => "brown4",
        BurlyWood => "burlywood",
        BurlyWood1 => "burlywood1",
        BurlyWood2 => "burlywood2",
        BurlyWood3 => "burlywood3",
        BurlyWood4 => "burlywood4",
        CadetBlue => "cadetblue",
        CadetBlue1 => "cadetblue1",
        CadetBlue2 => "cadetblue2",
        CadetBlue3 => "cadetblue3",
        CadetBlue4 => "cadetblue4",
        Chartreuse => "chartreuse",
        Chartreuse1 => "chartreuse1",
        Chartreuse2 => "chartreuse2",
        Chartreuse3 => "chartreuse3",
        Chartreuse4 => "chartreuse4",
        Chocolate => "chocolate",
        Chocolate1 => "chocolate1",
        Chocolate2 => "chocolate2",
        Chocolate3 => "chocolate3",
        Chocolate4 => "chocolate4",
        Coral => "coral",
        Coral1 => "coral1",
        Coral2 => "coral2",
        Coral3 => "coral3",
        Coral4 => "coral4",
        CornflowerBlue => "cornflowerblue",
        Cornsilk => "cornsilk",
        Cornsilk1 => "cornsilk1",
        Cornsilk2 => "cornsilk2",
        Cornsilk3 => "cornsilk3",
        Cornsilk4 => "cornsilk4",
        Crimson => "crimson",
        Cyan => "cyan",
        Cyan1 => "cyan1",
        Cyan2 => "cyan2",
        Cyan3 => "cyan3",
        Cyan4 => "cyan4",
        DarkGoldenrod => "darkgoldenrod",
        DarkGoldenrod1 => "darkgoldenrod1",
        DarkGoldenrod2 => "darkgoldenrod2",
        DarkGoldenrod3 => "darkgoldenrod3",
        DarkGoldenrod4 => "darkgoldenrod4",
        DarkGreen => "darkgreen",
        DarkKhaki => "darkkhaki",
        DarkOliveGreen => "darkolivegreen",
        DarkOliveGreen1 => "darkolivegreen1",
        DarkOliveGreen2 => "darkolivegreen2",
        DarkOliveGreen3 => "darkolivegreen3",
        DarkOliveGreen4 => "darkolivegreen4",
        DarkOrange => "darkorange",
        DarkOrange1 => "darkorange1",
        DarkOrange2 => "darkorange2",
        DarkOrange3 => "darkorange3",
        DarkOrange4 => "darkorange4",
        DarkOrchid => "darkorchid",
        DarkOrchid1 => "darkorchid1",
        DarkOrchid2 => "darkorchid2",
        DarkOrchid3 => "darkorchid3",
        DarkOrchid4 => "darkorchid4",
        DarkSalmon => "darksalmon",
        DarkSeaGreen => "darkseagreen",
        DarkSeaGreen1 => "darkseagreen1",
        DarkSeaGreen2 => "darkseagreen2",
        DarkSeaGreen3 => "darkseagreen3",
        DarkSeaGreen4 => "darkseagreen4",
        DarkSlateBlue => "darkslateblue",
        DarkSlateGray => "darkslategray",
        DarkSlateGray1 => "darkslategray1",
        DarkSlateGray2 => "darkslategray2",
        DarkSlateGray3 => "darkslategray3",
        DarkSlateGray4 => "darkslategray4",
        DarkSlateGrey => "darkslategrey",
        DarkTurquoise => "darkturquoise",
        DarkViolet => "darkviolet",
        DeepPink => "deeppink",
        DeepPink1 => "deeppink1",
        DeepPink2 => "deeppink2",
        DeepPink3 => "deeppink3",
        DeepPink4 => "deeppink4",
        DeepSkyBlue => "deepskyblue",
        DeepSkyBlue1 => "deepskyblue1",
        DeepSkyBlue2 => "deepskyblue2",
        DeepSkyBlue3 => "deepskyblue3",
        DeepSkyBlue4 => "deepskyblue4",
        DimGray => "dimgray",
        DimGrey => "dimgrey",
        DodgerBlue => "dodgerblue",
        DodgerBlue1 => "dodgerblue1",
        DodgerBlue2 => "dodgerblue2",
        DodgerBlue3 => "dodgerblue3",
        DodgerBlue4 => "dodgerblue4",
        Firebrick => "firebrick",
        Firebrick1 => "firebrick1",
        Firebrick2 => "firebrick2",
        Firebrick3 => "firebrick3",
        Firebrick4 => "firebrick4",
        FloralWhite => "floralwhite",
        ForestGreen => "forestgreen",
        Gainsboro => "gainsboro",
        GhostWhite => "ghostwhite",
        Gold => "gold",
        Gold1 => "gold1",
        Gold2 => "gold2",
        Gold3 => "gold3",
        Gold4 => "gold4",
        Goldenrod => "goldenrod",
        Goldenrod1 => "goldenrod1",
        Goldenrod2 => "goldenrod2",
        Goldenrod3 => "goldenrod3",
        Goldenrod4 => "goldenrod4",
        Gray => "gray",
        Gray0 => "gray0",
        Gray1 => "gray1",
        Gray10 => "gray10",
        Gray100 => "gray100",
        Gray11 => "gray11",
        Gray12 => "gray12",
        Gray13 => "gray13",
        Gray14 => "gray14",
        Gray15 => "gray15",
        Gray16 => "gray16",
        Gray17 => "gray17",
        Gray18 => "gray18",
        Gray19 => "gray19",
        Gray2 => "gray2",
        Gray20 => "gray20",
        Gray21 => "gray21",
        Gray22 => "gray22",
        Gray23 => "gray23",
        Gray24 => "gray24",
        Gray25 => "gray25",
        Gray26 => "gray26",
        Gray27 => "gray27",
        Gray28 => "gray28",
        Gray29 => "gray29",
        Gray3 => "gray3",
        Gray30 => "gray30",
        Gray31 => "gray31",
        Gray32 => "gray32",
        Gray33 => "gray33",
        Gray34 => "gray34",
        Gray35 => "gray35",
        Gray36 => "gray36",
        Gray37 => "gray37",
        Gray38 => "gray38",
        Gray39 => "gray39",
        Gray4 => "gray4",
        Gray40 => "gray40",
        Gray41 => "gray41",
        Gray42 => "gray42",
        Gray43 => "gray43",
        Gray44 => "gray44",
        Gray45 => "gray45",
        Gray46 => "gray46",
        Gray47 => "gray47",
        Gray48 => "gray48",
        Gray49 => "gray49",
        Gray5 => "gray5",
        Gray50 => "gray50",
        Gray51 => "gray51",
        Gray52 => "gray52",
        Gray53 => "gray53",
        Gray54 => "gray54",
        Gray55 => "gray55",
        Gray56 => "gray56",
        Gray57 => "gray57",
        Gray58 => "gray58",
        Gray59 => "gray59",
        Gray6 => "gray6",
        Gray60 => "gray60",
        Gray61 => "gray61",
        Gray62 => "gray62",
        Gray63 => "gray63",
        Gray64 => "gray64",
        Gray65 => "gray65",
        Gray66 => "gray66",
        Gray67 => "gray67",
        Gray68 => "gray68",
        Gray69 => "gray69",
        Gray7 => "gray7",
        Gray70 => "gray70",
        Gray71 => "gray71",
        Gray72 => "gray72",
        Gray73 => "gray73",
        Gray74 => "gray74",
        Gray75 => "gray75",
        Gray76 => "gray76",
        Gray77 => "gray77",
        Gray78 => "gray78",
        Gray79 => "gray79",
        Gray8 => "gray8",
        Gray80 => "gray80",
        Gray81 => "gray81",
        Gray82 => "gray82",
        Gray83 => "gray83",
        Gray84 => "gray84",
        Gray85 => "gray85",
        Gray86 => "gray86",
        Gray87 => "gray87",
        Gray88 => "gray88",
        Gray89 => "gray89",
        Gray9 => "gray9",
        Gray90 => "gray90",
        Gray91 => "gray91",
        Gray92 => "gray92",
        Gray93 => "gray93",
        Gray94 => "gray94",
        Gray95 => "gray95",
        Gray96 => "gray96",
        Gray97 => "gray97",
        Gray98 => "gray98",
        Gray99 => "gray99",
        Green => "green",
        Green1 => "green1",
        Green2 => "green2",
        Green3 => "green3",
        Green4 => "green4",
        GreenYellow => "greenyellow",
        Grey => "grey",
        Grey0 => "grey0",
        Grey1 => "grey1",
        Grey10 => "grey10",
        Grey100 => "grey100",
        Grey11 => "grey11",
        Grey12 => "grey12",
        Grey13 => "grey13",
        Grey14 => "grey14",
        Grey15 => "grey15",
        Grey16 => "grey16",
        Grey17 => "grey17",
        Grey18 => "grey18",
        Grey19 => "grey19",
        Grey2 => "grey2",
        Grey20 => "grey20",
        Grey21 => "grey21",
        Grey22 => "grey22",
        Grey23 => "grey23",
        Grey24 => "grey24",
        Grey25 => "grey25",
        Grey26 => "grey26",
        Grey27 => "grey27",
        Grey28 => "grey28",
        Grey29 => "grey29",
        Grey3 => "grey3",
        Grey30 => "grey30",
        Grey31 => "grey31",
        Grey32 => "grey32",
        Grey33 => "grey33",
        Grey34 => "grey34",
        Grey35 => "grey35",
        Grey36 => "grey36",
        Grey37 => "grey37",
        Grey38 => "grey38",
        Grey39 => "grey39",
        Grey4 => "grey4",
        Grey40 => "grey40",
        Grey41 => "grey41",
        Grey42 => "grey42",
        Grey43 => "grey43",
        Grey44 => "grey44",
        Grey45 => "grey45",
        Grey46 => "grey46",
        Grey47 => "grey47",
        Grey48 => "grey48",
        Grey49 => "grey49",
        Grey5 => "grey5",
        Grey50 => "grey50",
        Grey51 => "grey51",
        Grey52 => "grey52",
        Grey53 => "grey53",
        Grey54 => "grey54",
        Grey55 => "grey55",
        Grey56 => "grey56",
        Grey57 => "grey57",
        Grey58 => "grey58",
        Grey59 => "grey59",
        Grey6 => "grey6",
        Grey60 => "grey60",
        Grey61 => "grey61",
        Grey62 => "grey62",
        Grey63 => "grey63",
        Grey64 => "grey64",
        Grey65 => "grey65",
        Grey66 => "grey66",
        Grey67 => "grey67",
        Grey68 => "grey68",
        Grey69 => "grey69",
        Grey7 => "grey7",
        Grey70 => "grey70",
        Grey71 => "grey71",
        Grey72 => "grey72",
        Grey73 => "grey73",
        Grey74 => "grey74",
        Grey75 => "grey75",
        Grey76 => "grey76",
        Grey77 => "grey77",
        Grey78 => "grey78",
        Grey79 => "grey79",
        Grey8 => "grey8",
        Grey80 => "grey80",
        Grey81 => "grey81",
        Grey82 => "grey82",
        Grey83 => "grey83",
        Grey84 => "grey84",
        Grey85 => "grey85",
        Grey86 => "grey86",
        Grey87 => "grey87",
        Grey88 => "grey88",
        Grey89 => "grey89",
        Grey9 => "grey9",
        Grey90 => "grey90",
        Grey91 => "grey91",
        Grey92 => "grey92",
        Grey93 => "grey93",
        Grey94 => "grey94",
        Grey95 => "grey95",
        Grey96 => "grey96",
        Grey97 => "grey97",
        Grey98 => "grey98",
        Grey99 => "grey99",
        Honeydew => "honeydew",
        Honeydew1 => "honeydew1",
        Honeydew2 => "honeydew2",
        Honeydew3 => "honeydew3",
        Honeydew4 => "honeydew4",
        HotPink => "hotpink",
        HotPink1 => "hotpink1",
        HotPink2 => "hotpink2",
        HotPink3 => "hotpink3",
        HotPink4 => "hotpink4",
        IndianRed => "indianred",
        IndianRed1 => "indianred1",
        IndianRed2 => "indianred2",
        IndianRed3 => "indianred3",
        IndianRed4 => "indianred4",
        Indigo => "indigo",
        Invis => "invis",
        Ivory => "ivory",
        Ivory1 => "ivory1",
        Ivory2 => "ivory2",
        Ivory3 => "ivory3",
        Ivory4 => "ivory4",
        Khaki => "khaki",
        Khaki1 => "khaki1",
        Khaki2 => "khaki2",
        Khaki3 => "khaki3",
        Khaki4 => "khaki4",
        Lavender => "lavender",
        LavenderBlush => "lavenderblush",
        LavenderBlush1 => "lavenderblush1",
        LavenderBlush2 => "lavenderblush2",
        LavenderBlush3 => "lavenderblush3",
        LavenderBlush4 => "lavenderblush4",
        LawnGreen => "lawngreen",
        LemonChiffon => "lemonchiffon",
        LemonChiffon1 => "lemonchiffon1",
        LemonChiffon2 => "lemonchiffon2",
        LemonChiffon3 => "lemonchiffon3",
        LemonChiffon4 => "lemonchiffon4",
        LightBlue => "lightblue",
        LightBlue1 => "lightblue1",
        LightBlue2 => "lightblue2",
        LightBlue3 => "lightblue3",
        LightBlue4 => "lightblue4",
        LightCoral => "lightcoral",
        LightCyan => "lightcyan",
        LightCyan1 => "lightcyan1",
        LightCyan2 => "lightcyan2",
        LightCyan3 => "lightcyan3",
        LightCyan4 => "lightcyan4",
        LightGoldenrod => "lightgoldenrod",
        LightGoldenrod1 => "lightgoldenrod1",
        LightGoldenrod2 => "lightgoldenrod2",
        LightGoldenrod3 => "lightgoldenrod3",
        LightGoldenrod4 => "lightgoldenrod4",
        LightGoldenrodYellow => "lightgoldenrodyellow",
        LightGray => "lightgray",
        LightGrey => "lightgrey",
        LightPink => "lightpink",
        LightPink1 => "lightpink1",
        LightPink2 => "lightpink2",
        LightPink3 => "lightpink3",
        LightPink4 => "lightpink4",
        LightSalmon => "lightsalmon",
        LightSalmon1 => "lightsalmon1",
        LightSalmon2 => "lightsalmon2",
        LightSalmon3 => "lightsalmon3",
        LightSalmon4 => "lightsalmon4",
        LightSeaGreen => "lightseagreen",
        LightSkyBlue => "lightskyblue",
        LightSkyBlue1 => "lightskyblue1",
        LightSkyBlue2 => "lightskyblue2",
        LightSkyBlue3 => "lightskyblue3",
        LightSkyBlue4 => "lightskyblue4",
        LightSlateBlue => "lightslateblue",
        LightSlateGray => "lightslategray",
        LightSlateGrey => "lightslategrey",
        LightSteelBlue => "lightsteelblue",
        LightSteelBlue1 => "lightsteelblue1",
        LightSteelBlue2 => "lightsteelblue2",
        LightSteelBlue3 => "lightsteelblue3",
        LightSteelBlue4 => "lightsteelblue4",
        LightYellow => "lightyellow",
        LightYellow1 => "lightyellow1",
        LightYellow2 => "lightyellow2",
        LightYellow3 => "lightyellow3",
        LightYellow4 => "lightyellow4",
        LimeGreen => "limegreen",
        Linen => "linen",
        Magenta => "magenta",
        Magenta1 => "magenta1",
        Magenta2 => "magenta2",
        Magenta3 => "magenta3",
        Magenta4 => "magenta4",
        Maroon => "maroon",
        Maroon1 => "maroon1",
        Maroon2 => "maroon2",
        Maroon3 => "maroon3",
        Maroon4 => "maroon4",
        MediumAquamarine => "mediumaquamarine",
        MediumBlue => "mediumblue",
        MediumOrchid => "mediumorchid",
        MediumOrchid1 => "mediumorchid1",
        MediumOrchid2 => "mediumorchid2",
        MediumOrchid3 => "mediumorchid3",
        MediumOrchid4 => "mediumorchid4",
        MediumPurple => "mediumpurple",
        MediumPurple1 => "mediumpurple1",
        MediumPurple2 => "mediumpurple2",
        MediumPurple3 => "mediumpurple3",
        MediumPurple4 => "mediumpurple4",
        MediumSeaGreen => "mediumseagreen",
        MediumSlateBlue => "mediumslateblue",
        MediumSpringGreen => "mediumspringgreen",
        MediumTurquoise => "mediumturquoise",
        MediumVioletRed => "mediumvioletred",
        MidnightBlue => "midnightblue",
        MintCream => "mintcream",
        MistyRose => "mistyrose",
        MistyRose1 => "mistyrose1",
        MistyRose2 => "mistyrose2",
        MistyRose3 => "mistyrose3",
        MistyRose4 => "mistyrose4",
        Moccasin => "moccasin",
        NavajoWhite => "navajowhite",
        NavajoWhite1 => "navajowhite1",
        NavajoWhite2 => "navajowhite2",
        NavajoWhite3 => "navajowhite3",
        NavajoWhite4 => "navajowhite4",
        Navy => "navy",
        NavyBlue => "navyblue",
        None => "none",
        OldLace => "oldlace",
        OliveDrab => "olivedrab",
        OliveDrab1 => "olivedrab1",
        OliveDrab2 => "olivedrab2",
        OliveDrab3 => "olivedrab3",
        OliveDrab4 => "olivedrab4",
        Orange => "orange",
        Orange1 => "orange1",
        Orange2 => "orange2",
        Orange3 => "orange3",
        Orange4 => "orange4",
        OrangeRed => "orangered",
        OrangeRed1 => "orangered1",
        OrangeRed2 => "orangered2",
        OrangeRed3 => "orangered3",
        OrangeRed4 => "orangered4",
        Orchid => "orchid",
        Orchid1 => "orchid1",
        Orchid2 => "orchid2",
        Orchid3 => "orchid3",
        Orchid4 => "orchid4",
        PaleGoldenrod => "palegoldenrod",
        PaleGreen => "palegreen",
        PaleGreen1 => "palegreen1",
        PaleGreen2 => "palegreen2",
        PaleGreen3 => "palegreen3",
        PaleGreen4 => "palegreen4",
        PaleTurquoise => "paleturquoise",
        PaleTurquoise1 => "paleturquoise1",
        PaleTurquoise2 => "paleturquoise2",
        PaleTurquoise3 => "paleturquoise3",
        PaleTurquoise4 => "paleturquoise4",
        PaleVioletRed => "palevioletred",
        PaleVioletRed1 => "palevioletred1",
        PaleVioletRed2 => "palevioletred2",
        PaleVioletRed3 => "palevioletred3",
        PaleVioletRed4 => "palevioletred4",
        PapayaWhip => "papayawhip",
        PeachPuff => "peachpuff",
        PeachPuff1 => "peachpuff1",
        PeachPuff2 => "peachpuff2",
        PeachPuff3 => "peachpuff3",
        PeachPuff4 => "peachpuff4",
        Peru => "peru",
        Pink => "pink",
        Pink1 => "pink1",
        Pink2 => "pink2",
        Pink3 => "pink3",
        Pink4 => "pink4",
        Plum => "plum",
        Plum1 => "plum1",
        Plum2 => "plum2",
        Plum3 => "plum3",
        Plum4 => "plum4",
        PowderBlue => "powderblue",
        Purple => "purple",
        Purple1 => "purple1",
        Purple2 => "purple2",
        Purple3 => "purple3",
        Purple4 => "purple4",
        Red => "red",
        Red1 => "red1",
        Red2 => "red2",
        Red3 => "red3",
        Red4 => "red4",
        RosyBrown => "rosybrown",
        RosyBrown1 => "rosybrown1",
        RosyBrown2 => "rosybrown2",
        RosyBrown3 => "rosybrown3",
        RosyBrown4 => "rosybrown4",
        RoyalBlue => "royalblue",
        RoyalBlue1 => "royalblue1",
        RoyalBlue2 => "royalblue2",
        RoyalBlue3 => "royalblue3",
        RoyalBlue4 => "royalblue4",
        SaddleBrown => "saddlebrown",
        Salmon => "salmon",
        Salmon1 => "salmon1",
        Salmon2 => "salmon2",
        Salmon3 => "salmon3",
        Salmon4 => "salmon4",
        SandyBrown => "sandybrown",
        SeaGreen => "seagreen",
        SeaGreen1 => "seagreen1",
        SeaGreen2 => "seagreen2",
        SeaGreen3 => "seagreen3",
        SeaGreen4 => "seagreen4",
        Seashell => "seashell",
        Seashell1 => "seashell1",
        Seashell2 => "seashell2",
        Seashell3 => "seashell3",
        Seashell4 => "seashell4",
        Sienna => "sienna",
        Sienna1 => "sienna1",
        Sienna2 => "sienna2",
        Sienna3 => "sienna3",
        Sienna4 => "sienna4",
        SkyBlue => "skyblue",
        SkyBlue1 => "skyblue1",
        SkyBlue2 => "skyblue2",
        SkyBlue3 => "skyblue3",
        SkyBlue4 => "skyblue4",
        SlateBlue => "slateblue",
        SlateBlue1 => "slateblue1",
        SlateBlue2 => "slateblue2",
        SlateBlue3 => "slateblue3",
        SlateBlue4 => "slateblue4",
        SlateGray => "slategray",
        SlateGray1 => "slategray1",
        SlateGray2 => "slategray2",
        SlateGray3 => "slategray3",
        SlateGray4 => "slategray4",
        SlateGrey => "slategrey",
        Snow => "snow",
        Snow1 => "snow1",
        Snow2 => "snow2",
        Snow3 => "snow3",
        Snow4 => "snow4",
        SpringGreen => "springgreen",
        SpringGreen1 => "springgreen1",
        SpringGreen2 => "springgreen2",
        SpringGreen3 => "springgreen3",
        SpringGreen4 => "springgreen4",
        SteelBlue => "steelblue",
        SteelBlue1 => "steelblue1",
        SteelBlue2 => "steelblue2",
        SteelBlue3 => "steelblue3",
        SteelBlue4 => "steelblue4",
        Tan => "tan",
        Tan1 => "tan1",
        Tan2 => "tan2",
        Tan3 => "tan3",
        Tan4 => "tan4",
        Thistle => "thistle",
        Thistle1 => "thistle1",
        Thistle2 => "thistle2",
        Thistle3 => "thistle3",
        Thistle4 => "thistle4",
        Tomato => "tomato",
        Tomato1 => "tomato1",
        Tomato2 => "tomato2",
        Tomato3 => "tomato3",
        Tomato4 => "tomato4",
        Transparent => "transparent",
        Turquoise => "turquoise",
        Turquoise1 => "turquoise1",
        Turquoise2 => "turquoise2",
        Turquoise3 => "turquoise3",
        Turquoise4 => "turquoise4",
        Violet => "violet",
        VioletRed => "violetred",
        VioletRed1 => "violetred1",
        VioletRed2 => "violetred2",
        VioletRed3 => "violetred3",
        VioletRed4 => "violetred4",
        Wheat => "wheat",
        Wheat1 => "wheat1",
        Wheat2 => "wheat2",
        Wheat3 => "wheat3",
        Wheat4 => "wheat4",
        White => "white",
        WhiteSmoke => "whitesmoke",
        Yellow => "yellow",
        Yellow1 => "yellow1",
        Yellow2 => "yellow2",
        Yellow3 => "yellow3",
        Yellow4 => "yellow4",
        YellowGreen => "yellowgreen",
    }
}
