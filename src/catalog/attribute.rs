//! Attribute names.
//!
//! The [`Attribute`] domain is the reverse lookup from an attribute enumeration to the
//! key written on the left of `key=value`. Variant names are the key with its first
//! letter capitalised, except for the `URL` family which is spelled `Url`.

domain_table! {
    /// Attribute keys understood by Graphviz.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotkit::catalog::{Attribute, RankDir};
    ///
    /// let stmt = format!("{}={}", Attribute::Rankdir.key(), RankDir::LeftRight);
    /// assert_eq!(stmt, "rankdir=LR");
    /// ```
    pub enum Attribute {
        Damping => "Damping",
        K => "K",
        Url => "URL",
        Area => "area",
        Arrowhead => "arrowhead",
        Arrowsize => "arrowsize",
        Arrowtail => "arrowtail",
        Aspect => "aspect",
        Bb => "bb",
        Bgcolor => "bgcolor",
        Center => "center",
        Charset => "charset",
        Clusterrank => "clusterrank",
        Color => "color",
        Colorscheme => "colorscheme",
        Comment => "comment",
        Compound => "compound",
        Concentrate => "concentrate",
        Constraint => "constraint",
        Decorate => "decorate",
        Defaultdist => "defaultdist",
        Dim => "dim",
        Dimen => "dimen",
        Dir => "dir",
        Diredgeconstraints => "diredgeconstraints",
        Distortion => "distortion",
        Dpi => "dpi",
        EdgeUrl => "edgeURL",
        Edgehref => "edgehref",
        Edgetarget => "edgetarget",
        Edgetooltip => "edgetooltip",
        Epsilon => "epsilon",
        Esep => "esep",
        Fillcolor => "fillcolor",
        Fixedsize => "fixedsize",
        Fontcolor => "fontcolor",
        Fontname => "fontname",
        Fontnames => "fontnames",
        Fontpath => "fontpath",
        Fontsize => "fontsize",
        Forcelabels => "forcelabels",
        Gradientangle => "gradientangle",
        Group => "group",
        HeadUrl => "headURL",
        Headclip => "headclip",
        Headhref => "headhref",
        Headlabel => "headlabel",
        Headport => "headport",
        Headtarget => "headtarget",
        Headtooltip => "headtooltip",
        Height => "height",
        Href => "href",
        Id => "id",
        Image => "image",
        Imagepath => "imagepath",
        Imagescale => "imagescale",
        Label => "label",
        LabelUrl => "labelURL",
        LabelScheme => "label_scheme",
        Labelangle => "labelangle",
        Labeldistance => "labeldistance",
        Labelfloat => "labelfloat",
        Labelfontcolor => "labelfontcolor",
        Labelfontname => "labelfontname",
        Labelfontsize => "labelfontsize",
        Labelhref => "labelhref",
        Labeljust => "labeljust",
        Labelloc => "labelloc",
        Labeltarget => "labeltarget",
        Labeltooltip => "labeltooltip",
        Landscape => "landscape",
        Layer => "layer",
        Layers => "layers",
        Layerselect => "layerselect",
        Layersep => "layersep",
        Layout => "layout",
        Len => "len",
        Levels => "levels",
        Levelsgap => "levelsgap",
        Lhead => "lhead",
        Lheight => "lheight",
        Lp => "lp",
        Ltail => "ltail",
        Lwidth => "lwidth",
        Margin => "margin",
        Maxiter => "maxiter",
        Mclimit => "mclimit",
        Mindist => "mindist",
        Minlen => "minlen",
        Mode => "mode",
        Model => "model",
        Mosek => "mosek",
        Nodesep => "nodesep",
        Nojustify => "nojustify",
        Normalize => "normalize",
        Nslimit => "nslimit",
        Nslimit1 => "nslimit1",
        Ordering => "ordering",
        Orientation => "orientation",
        Outputorder => "outputorder",
        Overlap => "overlap",
        OverlapScaling => "overlap_scaling",
        Pack => "pack",
        Packmode => "packmode",
        Pad => "pad",
        Page => "page",
        Pagedir => "pagedir",
        Pencolor => "pencolor",
        Penwidth => "penwidth",
        Peripheries => "peripheries",
        Pin => "pin",
        Pos => "pos",
        Quadtree => "quadtree",
        Quantum => "quantum",
        Rank => "rank",
        Rankdir => "rankdir",
        Ranksep => "ranksep",
        Ratio => "ratio",
        Rects => "rects",
        Regular => "regular",
        Remincross => "remincross",
        Repulsiveforce => "repulsiveforce",
        Resolution => "resolution",
        Root => "root",
        Rotate => "rotate",
        Rotation => "rotation",
        Samehead => "samehead",
        Sametail => "sametail",
        Samplepoints => "samplepoints",
        Scale => "scale",
        Searchsize => "searchsize",
        Sep => "sep",
        Shape => "shape",
        Showboxes => "showboxes",
        Sides => "sides",
        Size => "size",
        Skew => "skew",
        Smoothing => "smoothing",
        Sortv => "sortv",
        Splines => "splines",
        Start => "start",
        Style => "style",
        Stylesheet => "stylesheet",
        TailUrl => "tailURL",
        Tailclip => "tailclip",
        Tailhref => "tailhref",
        Taillabel => "taillabel",
        Tailport => "tailport",
        Tailtarget => "tailtarget",
        Tailtooltip => "tailtooltip",
        Target => "target",
        Tooltip => "tooltip",
        Truecolor => "truecolor",
        Vertices => "vertices",
        Viewport => "viewport",
        VoroMargin => "voro_margin",
        Weight => "weight",
        Width => "width",
        Xlabel => "xlabel",
    }
}

impl Attribute {
    /// Returns the textual key of this attribute, or `""` for [`Attribute::Unset`].
    #[must_use]
    pub fn key(self) -> &'static str {
        crate::catalog::DomainValue::as_token(self)
    }
}
