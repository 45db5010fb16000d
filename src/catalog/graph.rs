//! Domains that apply to graphs, clusters and layout engines.

domain_table! {
    /// Graph `charset` values.
    pub enum Charset {
        Utf8 => "UTF-8",
        Latin1 => "Latin1",
    }
}

domain_table! {
    /// Graph `clusterrank` values.
    pub enum ClusterMode {
        Local => "local",
        Global => "global",
        None => "none",
    }
}

domain_table! {
    /// Graph `diredgeconstraints` values (neato only).
    pub enum DirEdgeConstraints {
        True => "true",
        Hier => "hier",
    }
}

domain_table! {
    /// Graph and cluster `labeljust` values.
    pub enum Justification {
        Left => "l",
        Right => "r",
    }
}

domain_table! {
    /// `labelloc` values.
    pub enum LabelLoc {
        Top => "t",
        Bottom => "b",
        Center => "c",
    }
}

domain_table! {
    /// Graph `mode` values (neato).
    pub enum Mode {
        Major => "major",
        KamadaKawai => "KK",
        Hier => "hier",
        IpSep => "ipsep",
    }
}

domain_table! {
    /// Graph `model` values (neato).
    pub enum Model {
        Circuit => "circuit",
        Subset => "subset",
        Mds => "mds",
    }
}

domain_table! {
    /// Graph and node `ordering` values.
    pub enum Ordering {
        Out => "out",
        In => "in",
    }
}

domain_table! {
    /// Graph `outputorder` values.
    pub enum OutputMode {
        BreadthFirst => "breadthfirst",
        NodesFirst => "nodesfirst",
        EdgesFirst => "edgesfirst",
    }
}

domain_table! {
    /// Graph `pagedir` values: the order in which pages are emitted.
    pub enum PageDir {
        BottomLeft => "BL",
        BottomRight => "BR",
        TopLeft => "TL",
        TopRight => "TR",
        RightBottom => "RB",
        RightTop => "RT",
        LeftBottom => "LB",
        LeftTop => "LT",
    }
}

domain_table! {
    /// Graph `quadtree` values (sfdp).
    pub enum QuadType {
        Normal => "normal",
        Fast => "fast",
        None => "none",
    }
}

domain_table! {
    /// Subgraph `rank` values.
    pub enum RankType {
        Same => "same",
        Min => "min",
        Source => "source",
        Max => "max",
        Sink => "sink",
    }
}

domain_table! {
    /// Graph `rankdir` values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotkit::catalog::RankDir;
    ///
    /// assert_eq!(format!("rankdir={}", RankDir::LeftRight), "rankdir=LR");
    /// ```
    pub enum RankDir {
        TopBottom => "TB",
        LeftRight => "LR",
        BottomTop => "BT",
        RightLeft => "RL",
    }
}

domain_table! {
    /// Keyword values of the graph `ratio` attribute.
    pub enum Ratio {
        Fill => "fill",
        Compress => "compress",
        Expand => "expand",
        Auto => "auto",
    }
}

domain_table! {
    /// Graph `smoothing` values (sfdp).
    pub enum SmoothType {
        None => "none",
        AvgDist => "avg_dist",
        GraphDist => "graph_dist",
        PowerDist => "power_dist",
        Rng => "rng",
        Spring => "spring",
        Triangle => "triangle",
    }
}

domain_table! {
    /// Graph `splines` values.
    pub enum SplineType {
        Line => "line",
        Spline => "spline",
        Polyline => "polyline",
        Ortho => "ortho",
        Compound => "compound",
    }
}

domain_table! {
    /// Node `imagescale` values.
    pub enum ImageScaleType {
        Width => "width",
        Height => "height",
        Both => "both",
    }
}
